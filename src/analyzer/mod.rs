pub mod constants;
pub mod corrector;
pub mod meal;
pub mod suggestions;

pub use constants::*;
pub use corrector::{closest_match, correct_food_name};
pub use meal::{analyze_meal, split_items, AnalyzerConfig};
pub use suggestions::suggest;
