//! Family and person entities plus the per-family summary record
//!
//! `Family` and `Person` are traits so statistics can run over any caller-owned
//! entity type. `FamilyRecord` and `PersonRecord` are the concrete,
//! serde-deserialisable forms used by the CLI and tests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A person with a non-negative age
pub trait Person {
    fn age(&self) -> u32;
}

/// A family: an identifier and an ordered collection of persons
pub trait Family {
    type Member: Person;

    fn id(&self) -> i32;

    fn persons(&self) -> &[Self::Member];
}

/// Concrete person entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub age: u32,
}

impl PersonRecord {
    pub fn new(age: u32) -> Self {
        Self { age }
    }
}

impl Person for PersonRecord {
    fn age(&self) -> u32 {
        self.age
    }
}

/// Concrete family entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRecord {
    pub id: i32,
    #[serde(default)]
    pub persons: Vec<PersonRecord>,
}

impl FamilyRecord {
    /// Build a family from an id and a list of ages
    pub fn with_ages(id: i32, ages: &[u32]) -> Self {
        Self {
            id,
            persons: ages.iter().copied().map(PersonRecord::new).collect(),
        }
    }
}

impl Family for FamilyRecord {
    type Member = PersonRecord;

    fn id(&self) -> i32 {
        self.id
    }

    fn persons(&self) -> &[PersonRecord] {
        &self.persons
    }
}

/// Computed statistics for a single family
///
/// `average_age` is zero whenever `member_count` is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySummary {
    pub family_id: i32,
    pub member_count: usize,
    pub average_age: Decimal,
}
