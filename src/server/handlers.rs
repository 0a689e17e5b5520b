use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::analyzer::analyze_meal;
use crate::models::{AnalysisResult, MealRequest};

use super::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodsResponse {
    pub foods: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `POST /analyze`
///
/// Bodies without a string `meal` field are rejected by the `Json` extractor
/// before reaching the analyzer.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<MealRequest>,
) -> Json<AnalysisResult> {
    Json(analyze_meal(&state.table, &request.meal, &state.config))
}

/// `GET /foods`: known food names, sorted, for autocomplete.
pub async fn list_foods(State(state): State<AppState>) -> Json<FoodsResponse> {
    let foods = state.table.names().into_iter().map(str::to_string).collect();
    Json(FoodsResponse { foods })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
