//! Filtered integer ranges
//!
//! Both generators walk the half-open range `[1, exclusive_upper_limit)`.

use crate::errors::{AppError, AppResult};
use tracing::{debug, warn};

/// Largest square accepted by [`descending_squares_divisible_by_seven`].
///
/// Deliberately half of `i32::MAX`, so the guard trips before a real i32 overflow.
pub const SQUARE_THRESHOLD: i64 = (i32::MAX / 2) as i64;

/// All even numbers in `[1, exclusive_upper_limit)`, ascending.
///
/// # Errors
/// `AppError::OutOfRange` if `exclusive_upper_limit` is lower than 1.
pub fn even_numbers(exclusive_upper_limit: i32) -> AppResult<Vec<i32>> {
    debug!("Generating even numbers below {}", exclusive_upper_limit);

    if exclusive_upper_limit < 1 {
        warn!(
            "Rejecting exclusive upper limit {} (must be >= 1)",
            exclusive_upper_limit
        );
        return Err(AppError::OutOfRange {
            parameter: "exclusive_upper_limit",
            value: exclusive_upper_limit as i64,
            minimum: 1,
        });
    }

    Ok((2..exclusive_upper_limit).step_by(2).collect())
}

/// Squares of the numbers in `[1, exclusive_upper_limit)` that are divisible by 7,
/// in descending order.
///
/// Returns an empty vector when `exclusive_upper_limit` is lower than 1.
///
/// # Errors
/// `AppError::Overflow` if any square exceeds [`SQUARE_THRESHOLD`]. The whole call
/// fails; no partial result is returned.
pub fn descending_squares_divisible_by_seven(exclusive_upper_limit: i32) -> AppResult<Vec<i32>> {
    debug!(
        "Collecting squares divisible by 7 below {}",
        exclusive_upper_limit
    );

    let mut squares = Vec::new();

    // Walking downwards yields descending squares and hits the guard on the first step
    for value in (1..exclusive_upper_limit.max(1) as i64).rev() {
        let square = value * value;
        if square > SQUARE_THRESHOLD {
            warn!(
                "Square of {} ({}) exceeds threshold {}",
                value, square, SQUARE_THRESHOLD
            );
            return Err(AppError::Overflow {
                value,
                square,
                threshold: SQUARE_THRESHOLD,
            });
        }

        if square % 7 == 0 {
            squares.push(square as i32);
        }
    }

    Ok(squares)
}
