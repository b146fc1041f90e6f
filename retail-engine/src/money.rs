//! Money calculation utilities using rust_decimal for precision
//!
//! Models carry `f64` at the serialization boundary; all aggregation and
//! ratio math is done with `Decimal` and rounded on the way out. Ratios
//! with a zero denominator are `None`, never infinity or NaN.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Rounding for dimensionless ratios (period-over-period change)
const RATIO_PLACES: u32 = 4;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for output rows, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Revenue of one order line: quantity × unit price
#[inline]
pub fn line_revenue(quantity: i32, price_per_unit: f64) -> Decimal {
    Decimal::from(quantity) * to_decimal(price_per_unit)
}

/// numerator / denominator × 100, or `None` when the denominator is zero
pub fn ratio_percent(numerator: Decimal, denominator: Decimal) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }
    Some(to_f64(numerator / denominator * Decimal::ONE_HUNDRED))
}

/// Period-over-period change: (a − b) / b, or `None` when b is zero
pub fn change_ratio(a: Decimal, b: Decimal) -> Option<f64> {
    if b.is_zero() {
        return None;
    }
    ((a - b) / b)
        .round_dp_with_strategy(RATIO_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}
