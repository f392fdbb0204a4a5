//! Per-family member count and average age.

use crate::errors::{AppError, AppResult};
use crate::types::{Family, FamilySummary, Person};
use crate::utils::math::safe_mean;
use tracing::{debug, warn};

/// One summary per family, in input order.
///
/// `families` is `None` when the caller has no collection at all; an empty slice
/// is valid and produces an empty result. `average_age` is zero for families
/// without persons.
///
/// # Errors
/// `AppError::NullArgument` if `families` is `None`.
pub fn family_statistics<F: Family>(families: Option<&[F]>) -> AppResult<Vec<FamilySummary>> {
    let families = families.ok_or_else(|| {
        warn!("Family statistics requested without a family collection");
        AppError::NullArgument("families")
    })?;

    debug!("Computing statistics for {} families", families.len());

    Ok(families.iter().map(summarise_family).collect())
}

fn summarise_family<F: Family>(family: &F) -> FamilySummary {
    let persons = family.persons();
    let total_age: u64 = persons.iter().map(|person| person.age() as u64).sum();

    FamilySummary {
        family_id: family.id(),
        member_count: persons.len(),
        average_age: safe_mean(total_age, persons.len()),
    }
}
