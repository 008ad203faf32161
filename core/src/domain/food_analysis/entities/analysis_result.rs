use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::entities::FoodItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub detected_items: Vec<FoodItem>,
    pub ai_summary: String,
}

impl AnalysisResult {
    pub fn new(detected_items: Vec<FoodItem>, ai_summary: String) -> Self {
        Self {
            detected_items,
            ai_summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.detected_items.is_empty()
    }
}
