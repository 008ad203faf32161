use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition facts for one standard portion of a catalogued dish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    /// Portion weight in grams
    pub weight: f64,
}

impl NutritionRecord {
    pub const fn new(
        calories: f64,
        protein: f64,
        carbohydrates: f64,
        fats: f64,
        weight: f64,
    ) -> Self {
        Self {
            calories,
            protein,
            carbohydrates,
            fats,
            weight,
        }
    }
}
