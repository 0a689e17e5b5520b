pub mod analysis;
pub mod nutrients;

pub use analysis::{AnalysisResult, FoodBreakdown, MealRequest};
pub use nutrients::Nutrients;
