use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub portion: String, // e.g. "150g"
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Model confidence in [0, 1]; barcode-derived items never carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Macronutrient amounts, either for one item or summed over a meal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub fn total(items: &[FoodItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            calories: acc.calories + item.calories,
            protein: acc.protein + item.protein,
            carbs: acc.carbs + item.carbs,
            fat: acc.fat + item.fat,
        })
    }
}

impl FoodItem {
    pub fn new(name: String, portion: String, macros: Macros, confidence: Option<f64>) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            portion,
            calories: macros.calories,
            protein: macros.protein,
            carbs: macros.carbs,
            fat: macros.fat,
            confidence,
            image: None,
        }
    }

    pub fn macros(&self) -> Macros {
        Macros {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}
