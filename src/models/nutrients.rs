use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Nutrient values for one serving of a food, or the running total of a meal.
///
/// Units follow the reference table: kcal for calories, grams for the
/// macronutrients, milligrams for vitamin C and iron.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub vitamin_c: f64,
    pub iron: f64,
}

impl Nutrients {
    /// All eight values set to zero.
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            sugar: 0.0,
            vitamin_c: 0.0,
            iron: 0.0,
        }
    }

    #[inline]
    fn values(&self) -> [f64; 8] {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.sugar,
            self.vitamin_c,
            self.iron,
        ]
    }

    /// Basic validation: every value finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.values().iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl AddAssign<&Nutrients> for Nutrients {
    fn add_assign(&mut self, rhs: &Nutrients) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
        self.fiber += rhs.fiber;
        self.sugar += rhs.sugar;
        self.vitamin_c += rhs.vitamin_c;
        self.iron += rhs.iron;
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Nutrients) {
        *self += &rhs;
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(mut self, rhs: Nutrients) -> Nutrients {
        self += &rhs;
        self
    }
}
