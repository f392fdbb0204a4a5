//! Mathematical utility functions for statistical analysis
//!
//! Decimal averaging with zero-division handling for use across the
//! analysis module.

use rust_decimal::Decimal;

/// Arithmetic mean as a `Decimal`, returning zero if `count` is zero.
///
/// No rounding is applied; the quotient keeps `Decimal`'s full 28-digit precision.
///
/// # Examples
/// ```
/// use collection_quiz::utils::math::safe_mean;
/// use rust_decimal::Decimal;
///
/// assert_eq!(safe_mean(60, 3), Decimal::from(20));
/// assert_eq!(safe_mean(5, 2), Decimal::new(25, 1));
/// assert_eq!(safe_mean(10, 0), Decimal::ZERO);  // Zero-division guard
/// ```
#[inline]
pub fn safe_mean(sum: u64, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(sum) / Decimal::from(count as u64)
    }
}
