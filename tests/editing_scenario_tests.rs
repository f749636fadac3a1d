//! End-to-end editing scenarios for the provider form state
//!
//! These tests drive `PaymentProvider` the way a settings dialog does: mode
//! switches, currency toggles and row edits, followed by validation and
//! payload building.

mod provider_harness;

use indexmap::IndexSet;
use local_payments::prelude::*;
use provider_harness::*;
use serde_json::json;

// =============================================================================
// Core editing behaviour
// =============================================================================

mod behaviour {
    use super::*;

    #[test]
    fn test_shared_provider_without_overrides_omits_accounts() {
        let provider = shared_provider(
            "Bank X",
            "12345",
            &[CurrencyCode::Yer, CurrencyCode::Sar],
            vec![],
        );

        assert!(provider.validate().is_ok());

        let value = serde_json::to_value(provider.build_payload()).unwrap();
        assert_eq!(value["sharedAccountNumber"], json!("12345"));
        assert_eq!(value["supportedCurrencies"], json!(["YER", "SAR"]));
        assert!(value.get("accounts").is_none());
    }

    #[test]
    fn test_shared_provider_requires_shared_number() {
        let provider = shared_provider(
            "Bank X",
            "",
            &[CurrencyCode::Yer, CurrencyCode::Sar],
            vec![],
        );
        assert_eq!(
            provider.validate(),
            Err(ValidationError::MissingSharedAccountNumber)
        );
    }

    #[test]
    fn test_per_currency_blank_row_blocks_validation() {
        let provider =
            per_currency_provider("Wallet", vec![CurrencyAccount::new(CurrencyCode::Yer)]);
        assert!(matches!(
            provider.validate(),
            Err(ValidationError::MissingAccountNumber { .. })
        ));
    }

    #[test]
    fn test_last_supported_currency_cannot_be_toggled_off() {
        let mut provider = shared_provider("Bank X", "1", &[CurrencyCode::Yer], vec![]);
        let before = provider.clone();

        let _ = provider.toggle_supported_currency(CurrencyCode::Yer);

        assert_eq!(provider, before);
        assert_eq!(
            provider.supported_currencies(),
            Some(&IndexSet::from([CurrencyCode::Yer]))
        );
    }

    #[test]
    fn test_untoggled_currency_prunes_its_override() {
        let mut provider = shared_provider(
            "Bank X",
            "1",
            &[CurrencyCode::Yer, CurrencyCode::Sar],
            vec![account(CurrencyCode::Sar, "9")],
        );

        provider.toggle_supported_currency(CurrencyCode::Sar).unwrap();

        assert_eq!(
            provider.supported_currencies(),
            Some(&IndexSet::from([CurrencyCode::Yer]))
        );
        assert!(provider.accounts().is_empty());
    }
}

// =============================================================================
// Mode switching
// =============================================================================

mod mode_switch {
    use super::*;

    #[test]
    fn test_seeding_from_empty_shared() {
        let mut provider = PaymentProvider::new();
        provider.set_numbering_mode(NumberingMode::PerCurrency);

        assert_eq!(provider.accounts().len(), 1);
        assert_eq!(provider.accounts()[0].account_number, "");
    }

    #[test]
    fn test_preservation_across_round_trip() {
        let a = account(CurrencyCode::Yer, "100");
        let b = account(CurrencyCode::Sar, "200");
        let mut provider = per_currency_provider("Wallet", vec![a.clone(), b.clone()]);

        provider.set_numbering_mode(NumberingMode::Shared);
        provider.set_numbering_mode(NumberingMode::PerCurrency);

        assert_eq!(provider.accounts(), &[a, b]);
    }

    #[test]
    fn test_switched_provider_validates_per_mode() {
        let mut provider = PaymentProvider::new().with_name("Bank X");
        provider.set_shared_account_number("555").unwrap();
        assert!(provider.validate().is_ok());

        provider.set_numbering_mode(NumberingMode::PerCurrency);
        assert!(matches!(
            provider.validate(),
            Err(ValidationError::MissingAccountNumber { .. })
        ));

        provider
            .update_account_row(0, AccountPatch::account_number("777"))
            .unwrap();
        assert!(provider.validate().is_ok());

        let payload = provider.build_payload();
        assert_eq!(payload.numbering_mode, NumberingMode::PerCurrency);
        assert!(payload.shared_account_number.is_none());
        assert_eq!(payload.accounts.unwrap()[0].account_number, "777");
    }

    #[test]
    fn test_only_reconciler_changes_mode() {
        let mut provider = PaymentProvider::new();
        let _ = provider.add_account_row();
        let _ = provider.update_account_row(0, AccountPatch::account_number("1"));
        let _ = provider.toggle_supported_currency(CurrencyCode::Usd);
        let _ = provider.remove_account_row(0);
        assert_eq!(provider.mode(), NumberingMode::Shared);
    }
}

// =============================================================================
// Invariant properties over edit sequences
// =============================================================================

mod invariants {
    use super::*;

    fn unique(provider: &PaymentProvider) -> bool {
        let currencies: IndexSet<_> = provider.accounts().iter().map(|a| a.currency).collect();
        currencies.len() == provider.accounts().len()
    }

    #[test]
    fn test_uniqueness_under_add_and_update() {
        for start in [NumberingMode::Shared, NumberingMode::PerCurrency] {
            let mut provider = PaymentProvider::new();
            provider.set_numbering_mode(start);
            if start.is_shared() {
                provider.toggle_supported_currency(CurrencyCode::Sar).unwrap();
                provider.toggle_supported_currency(CurrencyCode::Usd).unwrap();
            }

            for step in 0..20 {
                if step % 3 == 0 {
                    let _ = provider.add_account_row();
                }
                let len = provider.accounts().len();
                if len > 0 {
                    let currency = CurrencyCode::ALL[(step * 7) % CurrencyCode::ALL.len()];
                    let _ = provider
                        .update_account_row(step % len, AccountPatch::currency(currency));
                }
                assert!(unique(&provider), "duplicate currency after step {}", step);
            }
        }
    }

    #[test]
    fn test_supported_set_never_empty() {
        let mut provider = PaymentProvider::new();
        let sequence = [
            CurrencyCode::Yer,
            CurrencyCode::Sar,
            CurrencyCode::Yer,
            CurrencyCode::Sar,
            CurrencyCode::Usd,
            CurrencyCode::Usd,
            CurrencyCode::Sar,
        ];
        for currency in sequence.iter().cycle().take(40) {
            let _ = provider.toggle_supported_currency(*currency);
            assert!(!provider.supported_currencies().unwrap().is_empty());
        }
    }

    #[test]
    fn test_availability_exclusivity() {
        let providers = vec![
            per_currency_provider(
                "A",
                vec![account(CurrencyCode::Usd, "1"), account(CurrencyCode::Yer, "2")],
            ),
            shared_provider(
                "B",
                "3",
                &[CurrencyCode::Sar, CurrencyCode::Usd],
                vec![account(CurrencyCode::Sar, "4")],
            ),
            PaymentProvider::new(),
        ];

        for provider in &providers {
            let rows = provider.accounts().len();
            for exclude in std::iter::once(None).chain((0..=rows).map(Some)) {
                let available = available_currencies(provider, exclude);
                for (i, row) in provider.accounts().iter().enumerate() {
                    if Some(i) != exclude {
                        assert!(!available.contains(&row.currency));
                    }
                }
            }
        }
    }

    #[test]
    fn test_add_row_disabled_when_pool_exhausted() {
        let mut provider = PaymentProvider::new();
        provider.set_numbering_mode(NumberingMode::PerCurrency);
        while can_add_account_row(&provider) {
            provider.add_account_row().unwrap();
        }
        assert_eq!(provider.accounts().len(), CurrencyCode::ALL.len());
        assert_eq!(provider.add_account_row(), Err(EditError::NoCurrencyAvailable));
    }

    #[test]
    fn test_last_per_currency_row_cannot_be_removed() {
        let mut provider = per_currency_provider(
            "Wallet",
            vec![account(CurrencyCode::Yer, "1"), account(CurrencyCode::Sar, "2")],
        );
        provider.remove_account_row(0).unwrap();
        assert_eq!(provider.remove_account_row(0), Err(EditError::LastAccountRow));
        assert!(provider.validate().is_ok());
    }
}

// =============================================================================
// Payload
// =============================================================================

mod payload {
    use super::*;

    #[test]
    fn test_payload_never_has_blank_rows() {
        let shared = shared_provider(
            "Bank",
            "1",
            &CurrencyCode::ALL,
            vec![
                account(CurrencyCode::Yer, " "),
                account(CurrencyCode::Sar, "2"),
                CurrencyAccount::new(CurrencyCode::Usd),
            ],
        );
        let per = per_currency_provider(
            "Wallet",
            vec![account(CurrencyCode::Yer, ""), account(CurrencyCode::Usd, " 3 ")],
        );

        for provider in [shared, per] {
            let accounts = provider.build_payload().accounts.unwrap_or_default();
            assert!(accounts.iter().all(|a| !a.account_number.trim().is_empty()));
            assert_eq!(accounts.len(), 1);
        }
    }

    #[test]
    fn test_normalizing_twice_is_noop() {
        let provider = shared_provider(
            " Bank ",
            " 1 ",
            &[CurrencyCode::Sar, CurrencyCode::Yer],
            vec![account(CurrencyCode::Yer, ""), account(CurrencyCode::Sar, " 9 ")],
        );
        let once = provider.build_payload();
        let twice = once.clone().normalized();
        assert_eq!(once, twice);
        assert_eq!(normalize_accounts(once.accounts.as_deref().unwrap()), once.accounts.unwrap());
    }

    #[test]
    fn test_payload_survives_store_round_trip() {
        let provider = shared_provider(
            "Bank",
            "1",
            &[CurrencyCode::Sar, CurrencyCode::Yer],
            vec![account(CurrencyCode::Yer, ""), account(CurrencyCode::Sar, "9")],
        );
        let first = provider.build_payload();

        let record =
            ProviderRecord::from_payload(Uuid::new_v4(), first.clone(), chrono::Utc::now());
        let mut second = PaymentProvider::from_record(&record).build_payload();

        // ids are assigned by the backend on first save
        for row in second.accounts.iter_mut().flatten() {
            row.id = None;
        }
        assert_eq!(second, first);
    }
}
