use crate::analyzer::constants::*;
use crate::models::Nutrients;

/// Dietary suggestions for a meal's totals.
///
/// Each rule fires independently; order is protein, fiber, vitamin C.
pub fn suggest(totals: &Nutrients) -> Vec<String> {
    let rules = [
        (totals.protein < PROTEIN_MIN_G, PROTEIN_SUGGESTION),
        (totals.fiber < FIBER_MIN_G, FIBER_SUGGESTION),
        (totals.vitamin_c < VITAMIN_C_MIN_MG, VITAMIN_C_SUGGESTION),
    ];

    rules
        .into_iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, message)| message.to_string())
        .collect()
}
