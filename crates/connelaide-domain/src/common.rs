//! Shared traits and serde helpers for backend entities.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Exposes the backend identifier of an entity.
pub trait Identifiable {
    fn id(&self) -> i64;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Associates entities with an optional budget category.
pub trait BelongsToCategory {
    fn category_id(&self) -> Option<i64>;
}

/// Entities that fall on a single calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Deserializes a present field (including an explicit `null`) as `Some(value)`.
///
/// Paired with `#[serde(default)]` on `Option<Option<T>>` fields, this keeps a
/// missing key (`None`) distinct from a key set to `null` (`Some(None)`).
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Returns the value when it is a finite number, `0.0` otherwise.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
