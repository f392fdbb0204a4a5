//! Letter frequency types

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Occurrence count of a single uppercase letter. `count` is always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
}

/// Which characters count as letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterScope {
    /// Any character in the Unicode letter categories (Lu, Ll, Lt, Lm, Lo)
    #[default]
    Unicode,
    /// Only A-Z (either case)
    Ascii,
}

impl LetterScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterScope::Unicode => "unicode",
            LetterScope::Ascii => "ascii",
        }
    }

    /// Whether `c` is counted under this scope
    pub fn accepts(&self, c: char) -> bool {
        match self {
            LetterScope::Unicode => c.general_category_group() == GeneralCategoryGroup::Letter,
            LetterScope::Ascii => c.is_ascii_alphabetic(),
        }
    }
}

impl fmt::Display for LetterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unicode" => Ok(LetterScope::Unicode),
            "ascii" => Ok(LetterScope::Ascii),
            other => Err(AppError::InvalidData(format!(
                "Unknown letter scope '{}' (expected 'unicode' or 'ascii')",
                other
            ))),
        }
    }
}
