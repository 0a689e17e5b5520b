use serde::{Deserialize, Serialize};

use super::Nutrients;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRequest {
    /// Comma-separated meal description, e.g. `"rice, dal, curd"`.
    pub meal: String,
}

/// Contribution of one matched item to the meal totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodBreakdown {
    pub food: String,

    #[serde(flatten)]
    pub nutrients: Nutrients,
}

/// Outcome of analyzing one meal description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub nutrition: Nutrients,
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
    pub breakdown: Vec<FoodBreakdown>,
}
