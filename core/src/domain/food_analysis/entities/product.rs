use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Packaged product resolved from a barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    pub name: String,
    pub portion: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub barcode: Option<String>,
}
