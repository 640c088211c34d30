//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for calculator results that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Money, Rate};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value has exactly the given amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} {}, got {}",
        actual.currency().symbol(),
        expected,
        actual
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is not negative
pub fn assert_money_non_negative(money: &Money) {
    assert!(
        !money.is_negative(),
        "Expected non-negative money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a rate equals the given percentage (e.g. `dec!(22.5)`)
pub fn assert_rate_percent(rate: &Rate, expected_percent: Decimal) {
    assert_eq!(
        rate.as_percentage(),
        expected_percent,
        "Expected rate {}%, got {}",
        expected_percent,
        rate
    );
}

/// Asserts that two decimals are within `tolerance` of each other
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}
