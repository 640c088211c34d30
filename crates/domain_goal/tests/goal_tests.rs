//! Behaviour tests for domain_goal

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Currency;
use domain_goal::{plan_goal, GoalError, GoalInput};
use test_utils::{assert_money_eq, assert_money_non_negative, assert_money_zero, annual_percent_strategy, positive_amount_strategy};

// ============================================================================
// Known scenarios
// ============================================================================

mod known_scenarios {
    use super::*;

    #[test]
    fn test_two_year_goal_with_savings() {
        let result = plan_goal(&GoalInput::new(dec!(30000), dec!(5000), 24, dec!(12))).unwrap();

        assert_money_eq(&result.required_monthly_contribution, dec!(876.84));
        assert_money_eq(&result.future_value_of_current_amount, dec!(6348.67));
        assert_money_eq(&result.total_to_be_invested, dec!(26044.08));
    }

    #[test]
    fn test_alternate_scenarios() {
        let result = plan_goal(&GoalInput::new(dec!(30000), dec!(5000), 24, dec!(12))).unwrap();
        let scenarios = &result.alternate_scenarios;

        let offsets: Vec<i32> = scenarios.iter().map(|s| s.offset_months).collect();
        let months: Vec<u32> = scenarios.iter().map(|s| s.months).collect();
        assert_eq!(offsets, vec![-6, 0, 6, 12]);
        assert_eq!(months, vec![18, 24, 30, 36]);

        assert_money_eq(&scenarios[0].monthly_payment, dec!(1224.55));
        assert_money_eq(&scenarios[0].total_invested, dec!(27041.92));
        assert_money_eq(&scenarios[1].monthly_payment, dec!(876.84));
        assert_money_eq(&scenarios[2].monthly_payment, dec!(668.70));
        assert_money_eq(&scenarios[2].total_invested, dec!(25061.08));
        assert_money_eq(&scenarios[3].monthly_payment, dec!(530.36));
        assert_money_eq(&scenarios[3].total_invested, dec!(24092.88));
    }

    #[test]
    fn test_zero_return_splits_target_evenly() {
        let result = plan_goal(&GoalInput::new(dec!(12000), dec!(0), 12, Decimal::ZERO)).unwrap();

        assert_money_eq(&result.required_monthly_contribution, dec!(1000));
        assert_money_eq(&result.total_to_be_invested, dec!(12000));
        assert_money_zero(&result.future_value_of_current_amount);
    }

    #[test]
    fn test_goal_already_on_track_floors_at_zero() {
        let result = plan_goal(&GoalInput::new(dec!(10000), dec!(9000), 12, dec!(24))).unwrap();

        assert_money_zero(&result.required_monthly_contribution);
        assert_money_eq(&result.total_to_be_invested, dec!(9000));
        assert_money_eq(&result.future_value_of_current_amount, dec!(11414.18));
        for scenario in &result.alternate_scenarios {
            assert_money_zero(&scenario.monthly_payment);
            assert_money_eq(&scenario.total_invested, dec!(9000));
        }
    }

    #[test]
    fn test_currency_is_carried() {
        let input = GoalInput::new(dec!(5000), dec!(0), 10, dec!(6)).with_currency(Currency::EUR);
        let result = plan_goal(&input).unwrap();
        assert_eq!(result.required_monthly_contribution.currency(), Currency::EUR);
    }
}

// ============================================================================
// Rejections
// ============================================================================

mod rejection_tests {
    use super::*;

    #[test]
    fn test_target_below_current_is_invalid_goal() {
        let result = plan_goal(&GoalInput::new(dec!(1000), dec!(2000), 12, dec!(10)));
        assert!(matches!(result, Err(GoalError::InvalidGoal(_))));
    }

    #[test]
    fn test_error_message_is_user_facing() {
        let error = plan_goal(&GoalInput::new(dec!(1000), dec!(1000), 12, dec!(10))).unwrap_err();
        assert!(error.to_string().starts_with("Invalid goal"));
    }
}

// ============================================================================
// Property-based tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn contributions_are_never_negative(
            current in positive_amount_strategy(),
            extra in positive_amount_strategy(),
            months in 1u32..=360,
            annual_return in annual_percent_strategy()
        ) {
            let input = GoalInput::new(current + extra, current, months, annual_return);
            let result = plan_goal(&input).unwrap();

            assert_money_non_negative(&result.required_monthly_contribution);
            for scenario in &result.alternate_scenarios {
                assert_money_non_negative(&scenario.monthly_payment);
                prop_assert!(scenario.months > 0);
            }
        }

        #[test]
        fn longer_horizons_need_smaller_payments(
            target in positive_amount_strategy(),
            months in 7u32..=240,
            annual_return in annual_percent_strategy()
        ) {
            let result = plan_goal(&GoalInput::new(target, Decimal::ZERO, months, annual_return)).unwrap();
            let payments: Vec<Decimal> = result
                .alternate_scenarios
                .iter()
                .map(|s| s.monthly_payment.amount())
                .collect();

            prop_assert!(payments.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
