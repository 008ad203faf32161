use serde::{Deserialize, Serialize};

/// Nutrition facts embedded in a recognition response. Each field is optional;
/// absent fields fall back to per-field defaults when the item is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionOverride {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fats: Option<f64>,
    pub weight: Option<f64>,
}

/// Unresolved classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    pub label: String,
    pub confidence: f64,
    pub nutrition: Option<NutritionOverride>,
}

impl RawPrediction {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            nutrition: None,
        }
    }

    pub fn with_nutrition(mut self, nutrition: NutritionOverride) -> Self {
        self.nutrition = Some(nutrition);
        self
    }
}

/// One object found in the image, with its ranked candidate labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub candidates: Vec<RawPrediction>,
}

impl Detection {
    pub fn new(candidates: Vec<RawPrediction>) -> Self {
        Self { candidates }
    }

    /// Index of the highest-confidence candidate; the earliest wins ties.
    pub fn top_index(&self) -> Option<usize> {
        self.candidates
            .iter()
            .enumerate()
            .fold(None, |best: Option<usize>, (index, candidate)| match best {
                Some(current) if self.candidates[current].confidence >= candidate.confidence => {
                    Some(current)
                }
                _ => Some(index),
            })
    }

    pub fn top(&self) -> Option<&RawPrediction> {
        self.top_index().map(|index| &self.candidates[index])
    }
}

/// Everything a recognizer found in one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub detections: Vec<Detection>,
}

impl Recognition {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_picks_highest_confidence() {
        let detection = Detection::new(vec![
            RawPrediction::new("Idli", 0.4),
            RawPrediction::new("Dosa", 0.8),
            RawPrediction::new("Poha", 0.6),
        ]);
        assert_eq!(detection.top_index(), Some(1));
        assert_eq!(detection.top().map(|p| p.label.as_str()), Some("Dosa"));
    }

    #[test]
    fn test_top_keeps_earliest_on_tie() {
        let detection = Detection::new(vec![
            RawPrediction::new("Chai", 0.5),
            RawPrediction::new("Lassi", 0.5),
        ]);
        assert_eq!(detection.top_index(), Some(0));
    }

    #[test]
    fn test_top_of_empty_detection() {
        assert_eq!(Detection::default().top(), None);
    }
}
