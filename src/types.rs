//! Collection Quiz - Type System
//!
//! - `family`: Family/Person entity traits, concrete records and `FamilySummary`
//! - `letters`: `LetterCount` and the `LetterScope` classification switch

pub mod family;
pub mod letters;

pub use family::{Family, FamilyRecord, FamilySummary, Person, PersonRecord};
pub use letters::{LetterCount, LetterScope};
