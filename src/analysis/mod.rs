//! Collection analysis operations
//!
//! Four independent, stateless transformations over in-memory collections:
//!
//! - **Even Numbers** - even integers below an exclusive upper limit
//! - **Squares Divisible by Seven** - descending squares with a conservative overflow guard
//! - **Family Statistics** - member count and decimal average age per family
//! - **Letter Frequency** - case-insensitive letter counts over text
//!
//! ## Usage
//!
//! ```rust
//! use collection_quiz::analysis::{even_numbers, family_statistics, letter_frequency};
//! use collection_quiz::errors::AppResult;
//! use collection_quiz::types::FamilyRecord;
//!
//! fn example() -> AppResult<()> {
//!     let evens = even_numbers(10)?;
//!     assert_eq!(evens, vec![2, 4, 6, 8]);
//!
//!     let families = vec![FamilyRecord::with_ages(1, &[10, 20, 30])];
//!     let summaries = family_statistics(Some(families.as_slice()))?;
//!     assert_eq!(summaries[0].member_count, 3);
//!
//!     let letters = letter_frequency(Some("Hello"))?;
//!     assert_eq!(letters.len(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod family_stats;
pub mod letter_stats;
pub mod numbers;
pub mod reports;

// Re-export main interfaces
pub use family_stats::family_statistics;
pub use letter_stats::{letter_frequency, letter_frequency_with_scope};
pub use numbers::{descending_squares_divisible_by_seven, even_numbers, SQUARE_THRESHOLD};
pub use reports::{OutputFormat, ReportFormatter};
