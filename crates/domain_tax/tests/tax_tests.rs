//! Behaviour tests for domain_tax

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Rate;
use domain_tax::{compute_tax, optimization_tips, InstrumentType, TaxError, TaxTip, TaxableEvent};
use test_utils::{assert_money_eq, assert_money_zero, assert_rate_percent, holding_days_strategy, positive_amount_strategy};

fn fixed_income(holding_days: u32) -> TaxableEvent {
    TaxableEvent::new(dec!(10000), dec!(11000), holding_days, InstrumentType::FixedIncome)
}

// ============================================================================
// Income tax brackets
// ============================================================================

mod income_tax_tests {
    use super::*;

    #[test]
    fn test_six_month_fixed_income_scenario() {
        let result = compute_tax(&fixed_income(180)).unwrap();

        assert_money_eq(&result.gross_profit, dec!(1000));
        assert_rate_percent(&result.income_tax_rate, dec!(22.5));
        assert_money_eq(&result.income_tax_amount, dec!(225));
        assert_money_zero(&result.transaction_tax_amount);
        assert_money_eq(&result.total_tax, dec!(225));
        assert_money_eq(&result.net_profit, dec!(775));
        assert_money_eq(&result.net_amount, dec!(10775));
        assert!(!result.is_exempt);
        assert_eq!(result.exempt_reason, None);
    }

    #[test]
    fn test_bracket_boundaries() {
        let cases = [
            (180, dec!(22.5)),
            (181, dec!(20)),
            (360, dec!(20)),
            (361, dec!(17.5)),
            (720, dec!(17.5)),
            (721, dec!(15)),
            (5000, dec!(15)),
        ];
        for (days, percent) in cases {
            let result = compute_tax(&fixed_income(days)).unwrap();
            assert_rate_percent(&result.income_tax_rate, percent);
        }
    }

    #[test]
    fn test_funds_follow_the_same_brackets() {
        let event = TaxableEvent::new(dec!(10000), dec!(11000), 720, InstrumentType::Fund);
        let result = compute_tax(&event).unwrap();

        assert_money_eq(&result.income_tax_amount, dec!(175));
        assert_money_eq(&result.net_profit, dec!(825));
    }

    #[test]
    fn test_long_holding_pays_lowest_rate() {
        let result = compute_tax(&fixed_income(721)).unwrap();
        assert_money_eq(&result.income_tax_amount, dec!(150));
    }
}

// ============================================================================
// IOF
// ============================================================================

mod iof_tests {
    use super::*;

    #[test]
    fn test_iof_stacks_on_top_of_income_tax() {
        let result = compute_tax(&fixed_income(1)).unwrap();

        assert_rate_percent(&result.transaction_tax_rate, dec!(96));
        assert_money_eq(&result.transaction_tax_amount, dec!(960));
        assert_money_eq(&result.income_tax_amount, dec!(225));
        assert_money_eq(&result.total_tax, dec!(1185));
        assert_money_eq(&result.net_profit, dec!(-185));
        assert_money_eq(&result.net_amount, dec!(9815));
    }

    #[test]
    fn test_mid_window() {
        let result = compute_tax(&fixed_income(15)).unwrap();

        assert_money_eq(&result.transaction_tax_amount, dec!(500));
        assert_money_eq(&result.total_tax, dec!(725));
        assert_money_eq(&result.net_profit, dec!(275));
    }

    #[test]
    fn test_window_boundary() {
        let day_29 = compute_tax(&fixed_income(29)).unwrap();
        let day_30 = compute_tax(&fixed_income(30)).unwrap();

        assert_eq!(day_29.transaction_tax_rate.as_decimal(), dec!(0.03));
        assert_money_eq(&day_29.transaction_tax_amount, dec!(30));
        assert!(day_30.transaction_tax_rate.is_zero());
        assert_money_zero(&day_30.transaction_tax_amount);
    }

    #[test]
    fn test_zero_days_is_charged_as_day_one() {
        let result = compute_tax(&fixed_income(0)).unwrap();

        assert_rate_percent(&result.transaction_tax_rate, dec!(96));
        assert_rate_percent(&result.income_tax_rate, dec!(22.5));
    }
}

// ============================================================================
// Stocks
// ============================================================================

mod stock_tests {
    use super::*;

    fn stock_sale(instrument: InstrumentType, volume: Decimal) -> TaxableEvent {
        TaxableEvent::new(dec!(10000), dec!(12000), 100, instrument).with_monthly_sales_volume(volume)
    }

    #[test]
    fn test_sales_under_limit_are_exempt() {
        let result = compute_tax(&stock_sale(InstrumentType::Stock, dec!(15000))).unwrap();

        assert!(result.is_exempt);
        assert!(result.exempt_reason.is_some());
        assert!(result.income_tax_rate.is_zero());
        assert_money_zero(&result.total_tax);
        assert_money_eq(&result.net_amount, dec!(12000));
    }

    #[test]
    fn test_limit_itself_is_exempt() {
        let result = compute_tax(&stock_sale(InstrumentType::StockSwingTrade, dec!(20000))).unwrap();
        assert!(result.is_exempt);
    }

    #[test]
    fn test_sales_over_limit_pay_flat_rate() {
        let result = compute_tax(&stock_sale(InstrumentType::Stock, dec!(25000))).unwrap();

        assert!(!result.is_exempt);
        assert_eq!(result.exempt_reason, None);
        assert_rate_percent(&result.income_tax_rate, dec!(15));
        assert_money_eq(&result.income_tax_amount, dec!(300));
    }

    #[test]
    fn test_day_trade_is_never_exempt() {
        for days in [1, 45, 400, 900] {
            let event = TaxableEvent::new(dec!(10000), dec!(12000), days, InstrumentType::StockDayTrade);
            let result = compute_tax(&event).unwrap();

            assert_eq!(result.income_tax_rate, Rate::new(dec!(0.20)));
            assert!(!result.is_exempt);
        }
    }

    #[test]
    fn test_volume_is_ignored_for_fixed_income() {
        let event = fixed_income(200).with_monthly_sales_volume(dec!(1000000));
        let result = compute_tax(&event).unwrap();

        assert_rate_percent(&result.income_tax_rate, dec!(20));
    }
}

// ============================================================================
// Losses and invalid events
// ============================================================================

mod loss_tests {
    use super::*;

    #[test]
    fn test_loss_reports_zero_taxes_and_rates() {
        let event = TaxableEvent::new(dec!(10000), dec!(9000), 5, InstrumentType::FixedIncome);
        let result = compute_tax(&event).unwrap();

        assert_money_eq(&result.gross_profit, dec!(-1000));
        assert_money_zero(&result.total_tax);
        assert!(result.income_tax_rate.is_zero());
        assert!(result.transaction_tax_rate.is_zero());
        assert!(!result.is_exempt);
        assert_money_eq(&result.net_amount, dec!(9000));
        assert_money_eq(&result.net_profit, dec!(-1000));
        assert_eq!(result.effective_return, Decimal::ZERO);
    }

    #[test]
    fn test_total_loss_is_valid() {
        let event = TaxableEvent::new(dec!(10000), dec!(0), 10, InstrumentType::Stock);
        let result = compute_tax(&event).unwrap();
        assert_money_zero(&result.net_amount);
    }

    #[test]
    fn test_negative_final_amount_is_rejected() {
        let event = TaxableEvent::new(dec!(10000), dec!(-1), 10, InstrumentType::Fund);
        assert!(matches!(compute_tax(&event), Err(TaxError::InvalidEvent(_))));
    }
}

// ============================================================================
// Optimization tips
// ============================================================================

mod tips_tests {
    use super::*;

    fn tips_for(event: &TaxableEvent) -> Vec<TaxTip> {
        let result = compute_tax(event).unwrap();
        optimization_tips(event, &result)
    }

    #[test]
    fn test_iof_window_tip() {
        let tips = tips_for(&fixed_income(15));

        assert_eq!(tips.len(), 1);
        match &tips[0] {
            TaxTip::IofWindow { days_to_wait, iof_saved } => {
                assert_eq!(*days_to_wait, 15);
                assert_money_eq(iof_saved, dec!(500));
            }
            other => panic!("unexpected tip {:?}", other),
        }
    }

    #[test]
    fn test_bracket_step_tips() {
        assert_eq!(
            tips_for(&fixed_income(200)),
            vec![TaxTip::BracketStep {
                days_to_wait: 161,
                current_rate: Rate::new(dec!(0.20)),
                next_rate: Rate::new(dec!(0.175)),
            }]
        );
        assert_eq!(
            tips_for(&fixed_income(400)),
            vec![TaxTip::BracketStep {
                days_to_wait: 321,
                current_rate: Rate::new(dec!(0.175)),
                next_rate: Rate::new(dec!(0.15)),
            }]
        );
    }

    #[test]
    fn test_no_tips_in_first_or_last_bracket() {
        assert!(tips_for(&fixed_income(100)).is_empty());
        assert!(tips_for(&fixed_income(800)).is_empty());
    }

    #[test]
    fn test_no_bracket_tip_for_stocks() {
        let event = TaxableEvent::new(dec!(10000), dec!(12000), 200, InstrumentType::Stock)
            .with_monthly_sales_volume(dec!(50000));
        assert!(tips_for(&event).is_empty());
    }

    #[test]
    fn test_no_tips_on_loss() {
        let event = TaxableEvent::new(dec!(10000), dec!(9500), 10, InstrumentType::FixedIncome);
        assert!(tips_for(&event).is_empty());
    }

    #[test]
    fn test_tips_serialize_with_kind_tag() {
        let json = serde_json::to_value(tips_for(&fixed_income(10))).unwrap();
        assert_eq!(json[0]["kind"], "iof_window");
        assert_eq!(json[0]["days_to_wait"], 20);
    }
}

// ============================================================================
// Property-based tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn instrument_strategy() -> impl Strategy<Value = InstrumentType> {
        prop_oneof![
            Just(InstrumentType::FixedIncome),
            Just(InstrumentType::Fund),
            Just(InstrumentType::Stock),
            Just(InstrumentType::StockSwingTrade),
            Just(InstrumentType::StockDayTrade),
        ]
    }

    proptest! {
        #[test]
        fn loss_is_never_taxed(
            initial in positive_amount_strategy(),
            loss_fraction in 0u32..=100,
            days in holding_days_strategy(),
            instrument in instrument_strategy()
        ) {
            let final_amount = initial - initial * Decimal::from(loss_fraction) / dec!(100);
            let event = TaxableEvent::new(initial, final_amount, days, instrument);
            let result = compute_tax(&event).unwrap();

            prop_assert!(result.total_tax.is_zero());
            prop_assert!(!result.is_exempt);
        }

        #[test]
        fn total_tax_is_sum_of_parts(
            initial in positive_amount_strategy(),
            gain in positive_amount_strategy(),
            days in holding_days_strategy(),
            instrument in instrument_strategy()
        ) {
            let event = TaxableEvent::new(initial, initial + gain, days, instrument);
            let result = compute_tax(&event).unwrap();

            prop_assert_eq!(
                result.total_tax.amount(),
                result.income_tax_amount.amount() + result.transaction_tax_amount.amount()
            );
            prop_assert_eq!(
                result.net_profit.amount(),
                result.gross_profit.amount() - result.total_tax.amount()
            );
        }

        #[test]
        fn no_iof_after_thirty_days(days in 30u32..=5000) {
            let result = compute_tax(&fixed_income(days)).unwrap();
            prop_assert!(result.transaction_tax_amount.is_zero());
        }
    }
}
