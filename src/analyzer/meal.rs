use tracing::{debug, warn};

use crate::analyzer::constants::DEFAULT_SIMILARITY_CUTOFF;
use crate::analyzer::corrector::correct_food_name;
use crate::analyzer::suggestions::suggest;
use crate::models::{AnalysisResult, FoodBreakdown, Nutrients};
use crate::reference::NutritionTable;

/// Tunables for meal analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Minimum similarity for a typo correction to apply.
    pub cutoff: f64,
    /// Drop empty fragments (`"rice,,dal"`, trailing commas) instead of
    /// reporting them as missing.
    pub skip_empty_items: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_SIMILARITY_CUTOFF,
            skip_empty_items: false,
        }
    }
}

/// Lowercase the description and split it on commas into trimmed items.
///
/// Empty fragments are kept.
pub fn split_items(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(',')
        .map(|item| item.trim().to_string())
        .collect()
}

/// Total the nutrients of a comma-separated meal description.
pub fn analyze_meal(table: &NutritionTable, text: &str, config: &AnalyzerConfig) -> AnalysisResult {
    let mut nutrition = Nutrients::zero();
    let mut missing = Vec::new();
    let mut breakdown = Vec::new();

    for item in split_items(text) {
        if item.is_empty() && config.skip_empty_items {
            continue;
        }

        let name = correct_food_name(&item, table, config.cutoff);
        match table.get(&name) {
            Some(nutrients) => {
                nutrition += nutrients;
                breakdown.push(FoodBreakdown {
                    food: name,
                    nutrients: *nutrients,
                });
            }
            None => {
                warn!(item = %name, "food not found in nutrition table");
                missing.push(name);
            }
        }
    }

    let suggestions = suggest(&nutrition);

    debug!(
        matched = breakdown.len(),
        missing = missing.len(),
        calories = nutrition.calories,
        "analyzed meal"
    );

    AnalysisResult {
        nutrition,
        missing,
        suggestions,
        breakdown,
    }
}
