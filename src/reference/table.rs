use std::collections::HashMap;

use crate::error::{MealError, Result};
use crate::models::Nutrients;

/// Read-only mapping from canonical (lowercase) food name to its nutrients.
///
/// Built once at startup and shared between requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    foods: HashMap<String, Nutrients>,
}

impl NutritionTable {
    /// Build a table from `(name, nutrients)` pairs.
    ///
    /// Names are trimmed and lowercased; on duplicates the last entry wins.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Nutrients)>,
        S: AsRef<str>,
    {
        let foods = entries
            .into_iter()
            .map(|(name, nutrients)| (canonical_name(name.as_ref()), nutrients))
            .collect();
        Self { foods }
    }

    /// Nutrients for an exact canonical name.
    pub fn get(&self, name: &str) -> Option<&Nutrients> {
        self.foods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.foods.contains_key(name)
    }

    /// Iterate over canonical names in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    /// All canonical names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.keys().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Reject empty tables and records with negative or non-finite values.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(MealError::InvalidInput(
                "nutrition table has no entries".to_string(),
            ));
        }

        let mut invalid: Vec<&str> = self
            .foods
            .iter()
            .filter(|(name, nutrients)| name.is_empty() || !nutrients.is_valid())
            .map(|(name, _)| name.as_str())
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }

        invalid.sort_unstable();
        Err(MealError::InvalidInput(format!(
            "invalid nutrition records: {:?}",
            invalid
        )))
    }
}

/// Canonical key form: trimmed and lowercased.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}
