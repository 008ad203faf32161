use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::food_analysis::entities::{
    Detection, NutritionOverride, ProductRecord, RawPrediction, Recognition,
};

const UNKNOWN_PRODUCT: &str = "Unknown Product";
const PRODUCT_PORTION: &str = "100g";
const PRODUCT_DEFAULT_CALORIES: f64 = 100.0;

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<PredictionDto>,
    #[serde(default)]
    pub nutrition: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionDto {
    #[serde(rename = "class")]
    pub class_name: String,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
pub struct BarcodeResponse {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub nutrition_facts: Option<Value>,
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Reads a non-negative, finite number from `object[field]`. Anything else is
/// dropped so the caller's default applies.
fn non_negative(object: &serde_json::Map<String, Value>, field: &str) -> Option<f64> {
    let value = object.get(field)?;
    match value.as_f64() {
        Some(number) if number.is_finite() && number >= 0.0 => Some(number),
        _ if value.is_null() => None,
        _ => {
            warn!(field, %value, "discarding invalid nutrition value");
            None
        }
    }
}

impl NutritionOverride {
    /// Validates the nutrition object embedded in a recognition response.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Some(object) = value.as_object() else {
            if !value.is_null() {
                warn!(%value, "discarding nutrition override that is not an object");
            }
            return None;
        };

        Some(Self {
            calories: non_negative(object, "calories"),
            protein: non_negative(object, "protein"),
            carbohydrates: non_negative(object, "carbohydrates"),
            fats: non_negative(object, "fats"),
            weight: non_negative(object, "weight"),
        })
    }
}

impl From<PredictResponse> for Recognition {
    fn from(response: PredictResponse) -> Self {
        if response.predictions.is_empty() {
            return Recognition::empty();
        }

        let mut detection = Detection::new(
            response
                .predictions
                .into_iter()
                .map(|p| RawPrediction::new(p.class_name, p.confidence.clamp(0.0, 1.0)))
                .collect(),
        );

        // The embedded nutrition describes the backend's best guess.
        let nutrition = response.nutrition.as_ref().and_then(NutritionOverride::from_value);
        if let (Some(nutrition), Some(top)) = (nutrition, detection.top_index()) {
            detection.candidates[top].nutrition = Some(nutrition);
        }

        Recognition::new(vec![detection])
    }
}

impl From<BarcodeResponse> for ProductRecord {
    fn from(response: BarcodeResponse) -> Self {
        let facts = response
            .nutrition_facts
            .as_ref()
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self {
            name: response
                .product_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            portion: PRODUCT_PORTION.to_string(),
            calories: non_negative(&facts, "calories").unwrap_or(PRODUCT_DEFAULT_CALORIES),
            protein: non_negative(&facts, "protein").unwrap_or(0.0),
            carbs: non_negative(&facts, "carbohydrates").unwrap_or(0.0),
            fat: non_negative(&facts, "fat").unwrap_or(0.0),
            barcode: response.barcode,
        }
    }
}
