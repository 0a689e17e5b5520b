use crate::models::Nutrients;

use super::NutritionTable;

#[allow(clippy::too_many_arguments)]
const fn per_serving(
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    vitamin_c: f64,
    iron: f64,
) -> Nutrients {
    Nutrients {
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
        vitamin_c,
        iron,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bundled reference table, one typical serving per entry.
// kcal | protein g | carbs g | fat g | fiber g | sugar g | vitamin C mg | iron mg
// ─────────────────────────────────────────────────────────────────────────────

pub const BUILTIN_FOODS: &[(&str, Nutrients)] = &[
    // South Indian breakfast
    ("idli", per_serving(116.0, 4.0, 24.0, 0.4, 1.6, 0.2, 0.0, 0.8)),
    ("dosa", per_serving(168.0, 3.9, 29.0, 3.7, 0.9, 0.3, 0.0, 0.8)),
    ("sambar", per_serving(139.0, 6.4, 20.0, 4.0, 4.9, 3.5, 9.0, 1.4)),
    ("upma", per_serving(192.0, 4.6, 30.0, 6.0, 2.4, 1.2, 2.0, 1.1)),
    ("vada", per_serving(97.0, 3.8, 12.0, 4.0, 2.0, 0.5, 0.0, 0.9)),
    ("pongal", per_serving(200.0, 6.0, 30.0, 6.0, 2.0, 0.5, 0.0, 1.0)),
    ("poha", per_serving(180.0, 3.5, 33.0, 3.9, 1.5, 1.0, 2.0, 2.7)),
    // Grains and breads
    ("rice", per_serving(205.0, 4.3, 45.0, 0.4, 0.6, 0.1, 0.0, 0.4)),
    ("curd rice", per_serving(220.0, 6.0, 36.0, 5.0, 0.8, 3.0, 1.0, 0.5)),
    ("roti", per_serving(120.0, 3.1, 18.0, 3.7, 1.9, 0.4, 0.0, 1.2)),
    ("chapati", per_serving(120.0, 3.1, 18.0, 3.7, 1.9, 0.4, 0.0, 1.2)),
    ("paratha", per_serving(260.0, 5.2, 36.0, 10.0, 3.0, 1.0, 0.0, 1.6)),
    ("biryani", per_serving(290.0, 12.0, 38.0, 10.0, 1.5, 2.0, 3.0, 1.5)),
    ("khichdi", per_serving(210.0, 8.0, 36.0, 4.0, 4.0, 1.0, 2.0, 2.0)),
    // Pulses and legumes
    ("dal", per_serving(230.0, 18.0, 40.0, 0.8, 15.6, 3.6, 3.0, 6.6)),
    ("rajma", per_serving(210.0, 13.0, 38.0, 0.8, 11.0, 0.6, 2.0, 3.9)),
    ("chole", per_serving(269.0, 14.5, 45.0, 4.2, 12.5, 8.0, 2.1, 4.7)),
    // Dairy, eggs and meat
    ("curd", per_serving(98.0, 11.0, 3.4, 4.3, 0.0, 3.2, 0.8, 0.1)),
    ("milk", per_serving(103.0, 8.0, 12.0, 2.4, 0.0, 12.0, 0.0, 0.1)),
    ("paneer", per_serving(265.0, 18.3, 1.2, 20.8, 0.0, 2.6, 0.0, 0.2)),
    ("egg", per_serving(78.0, 6.3, 0.6, 5.3, 0.0, 0.6, 0.0, 0.6)),
    ("chicken", per_serving(239.0, 27.0, 0.0, 14.0, 0.0, 0.0, 0.0, 1.3)),
    ("fish", per_serving(206.0, 22.0, 0.0, 12.0, 0.0, 0.0, 0.0, 0.3)),
    // Vegetables
    ("spinach", per_serving(23.0, 2.9, 3.6, 0.4, 2.2, 0.4, 28.0, 2.7)),
    ("capsicum", per_serving(24.0, 1.0, 5.5, 0.2, 1.8, 3.0, 95.0, 0.4)),
    ("aloo sabzi", per_serving(150.0, 2.5, 20.0, 7.0, 2.5, 1.5, 12.0, 0.8)),
    ("salad", per_serving(35.0, 1.5, 7.0, 0.2, 2.5, 3.5, 20.0, 0.6)),
    // Fruit
    ("guava", per_serving(37.0, 1.4, 7.9, 0.5, 3.0, 4.9, 125.0, 0.1)),
    ("orange", per_serving(62.0, 1.2, 15.4, 0.2, 3.1, 12.2, 70.0, 0.1)),
    ("apple", per_serving(95.0, 0.5, 25.0, 0.3, 4.4, 19.0, 8.4, 0.2)),
    ("banana", per_serving(105.0, 1.3, 27.0, 0.4, 3.1, 14.4, 10.3, 0.3)),
    // Drinks
    ("tea", per_serving(40.0, 1.0, 6.0, 1.0, 0.0, 5.0, 0.0, 0.1)),
];

impl NutritionTable {
    /// The bundled reference table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FOODS.iter().map(|(name, nutrients)| (*name, *nutrients)))
    }
}
