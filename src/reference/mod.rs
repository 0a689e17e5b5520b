mod builtin;
mod persistence;
mod table;

pub use builtin::BUILTIN_FOODS;
pub use persistence::load_table;
pub use table::{canonical_name, NutritionTable};
