use crate::domain::{
    food_analysis::entities::{
        AnalysisResult, Detection, FoodItem, Macros, NutritionOverride, ProductRecord,
    },
    nutrition::{NutritionCatalog, NutritionRecord},
};

pub const DEFAULT_CALORIES: f64 = 100.0;
pub const DEFAULT_PROTEIN: f64 = 2.0;
pub const DEFAULT_CARBS: f64 = 15.0;
pub const DEFAULT_FAT: f64 = 5.0;
pub const DEFAULT_WEIGHT_GRAMS: f64 = 100.0;

pub const NOTHING_DETECTED_SUMMARY: &str =
    "I couldn't identify any food items in this image. Please try again with a clearer photo.";

impl From<&NutritionRecord> for NutritionOverride {
    fn from(record: &NutritionRecord) -> Self {
        Self {
            calories: Some(record.calories),
            protein: Some(record.protein),
            carbohydrates: Some(record.carbohydrates),
            fats: Some(record.fats),
            weight: Some(record.weight),
        }
    }
}

/// Turns raw predictions into nutrition-annotated food items and their summary.
#[derive(Debug, Clone, Copy)]
pub struct ResultAssembler<'a> {
    catalog: &'a NutritionCatalog,
}

impl<'a> ResultAssembler<'a> {
    pub fn new(catalog: &'a NutritionCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves the top candidate of every detection into a [`FoodItem`].
    pub fn assemble(&self, detections: &[Detection]) -> Vec<FoodItem> {
        detections
            .iter()
            .filter_map(Detection::top)
            .map(|prediction| {
                let nutrition = prediction
                    .nutrition
                    .or_else(|| self.catalog.lookup(&prediction.label).map(NutritionOverride::from))
                    .unwrap_or_default();

                FoodItem::new(
                    prediction.label.clone(),
                    format_portion(nutrition.weight.unwrap_or(DEFAULT_WEIGHT_GRAMS)),
                    Macros {
                        calories: nutrition.calories.unwrap_or(DEFAULT_CALORIES),
                        protein: nutrition.protein.unwrap_or(DEFAULT_PROTEIN),
                        carbs: nutrition.carbohydrates.unwrap_or(DEFAULT_CARBS),
                        fat: nutrition.fats.unwrap_or(DEFAULT_FAT),
                    },
                    Some(prediction.confidence),
                )
            })
            .collect()
    }

    pub fn summarize(&self, items: &[FoodItem]) -> String {
        if items.is_empty() {
            return NOTHING_DETECTED_SUMMARY.to_string();
        }

        let names = items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let noun = if items.len() == 1 { "item" } else { "items" };

        format!(
            "Detected {} {}: {}. Approx {} calories.",
            items.len(),
            noun,
            names,
            format_amount(Macros::total(items).calories)
        )
    }

    pub fn analyze(&self, detections: &[Detection]) -> AnalysisResult {
        let items = self.assemble(detections);
        let summary = self.summarize(&items);
        AnalysisResult::new(items, summary)
    }

    /// Single-item result for a product found by barcode. Carries no confidence.
    pub fn from_product(&self, product: ProductRecord) -> AnalysisResult {
        let item = FoodItem::new(
            product.name,
            product.portion,
            Macros {
                calories: product.calories,
                protein: product.protein,
                carbs: product.carbs,
                fat: product.fat,
            },
            None,
        );
        let summary = format!(
            "Detected a barcode for {}. Approx {} calories.",
            item.name,
            format_amount(item.calories)
        );

        AnalysisResult::new(vec![item], summary)
    }
}

fn format_portion(grams: f64) -> String {
    format!("{}g", format_amount(grams))
}

/// Rounds to one decimal place for display; whole numbers print without a fraction.
fn format_amount(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{}", rounded)
}
