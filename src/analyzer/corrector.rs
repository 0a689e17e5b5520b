use strsim::normalized_levenshtein;
use tracing::debug;

use crate::reference::NutritionTable;

/// Map a (lowercase) user-supplied food name onto the closest known name.
///
/// Exact matches are returned as-is. Otherwise the best-scoring key is used
/// when its similarity reaches `cutoff`; equal scores resolve to the
/// lexicographically larger key. With no close match the input is returned
/// unchanged.
pub fn correct_food_name(candidate: &str, table: &NutritionTable, cutoff: f64) -> String {
    if table.contains(candidate) {
        return candidate.to_string();
    }

    match closest_match(candidate, table) {
        Some((name, score)) if score >= cutoff => {
            debug!(candidate, corrected = name, score, "corrected food name");
            name.to_string()
        }
        _ => candidate.to_string(),
    }
}

/// Best key for `candidate` and its similarity in `[0, 1]`.
pub fn closest_match<'a>(candidate: &str, table: &'a NutritionTable) -> Option<(&'a str, f64)> {
    table
        .keys()
        .map(|name| (name, normalized_levenshtein(candidate, name)))
        .max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        })
}
