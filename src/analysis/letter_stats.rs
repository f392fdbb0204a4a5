//! Case-insensitive letter frequency over text.

use crate::errors::{AppError, AppResult};
use crate::types::{LetterCount, LetterScope};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Letter counts using Unicode letter classification.
///
/// See [`letter_frequency_with_scope`].
pub fn letter_frequency(text: Option<&str>) -> AppResult<Vec<LetterCount>> {
    letter_frequency_with_scope(text, LetterScope::Unicode)
}

/// Count each distinct letter in `text` after uppercasing.
///
/// Characters rejected by `scope` (digits, punctuation, whitespace, ...) are skipped.
/// Entries appear in order of first occurrence and never carry a zero count.
///
/// # Errors
/// `AppError::NullArgument` if `text` is `None`.
pub fn letter_frequency_with_scope(
    text: Option<&str>,
    scope: LetterScope,
) -> AppResult<Vec<LetterCount>> {
    let text = text.ok_or_else(|| {
        warn!("Letter frequency requested without text");
        AppError::NullArgument("text")
    })?;

    debug!(
        "Counting letters in {} bytes of text (scope: {})",
        text.len(),
        scope
    );

    let mut counts: Vec<LetterCount> = Vec::new();
    let mut positions: HashMap<char, usize> = HashMap::new();

    for letter in text.chars().filter(|c| scope.accepts(*c)).map(normalise) {
        match positions.get(&letter) {
            Some(&index) => counts[index].count += 1,
            None => {
                positions.insert(letter, counts.len());
                counts.push(LetterCount { letter, count: 1 });
            }
        }
    }

    Ok(counts)
}

/// Uppercase form of `c` when it maps to exactly one character, otherwise `c` itself
fn normalise(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
