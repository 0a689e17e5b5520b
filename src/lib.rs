pub mod analyzer;
pub mod cli;
pub mod error;
pub mod models;
pub mod reference;
pub mod server;

pub use analyzer::{analyze_meal, correct_food_name, AnalyzerConfig};
pub use error::{MealError, Result};
pub use models::{AnalysisResult, MealRequest, Nutrients};
pub use reference::NutritionTable;
