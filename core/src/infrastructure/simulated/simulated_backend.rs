use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IteratorRandom};
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{Detection, ProductRecord, RawPrediction, Recognition},
        ports::{BarcodeClient, RecognitionClient},
        value_objects::{BarcodeLookup, ImageUpload},
    },
    nutrition::NutritionCatalog,
};

const MAX_DETECTIONS: usize = 3;
const MIN_CONFIDENCE: f64 = 0.7;
const MAX_CONFIDENCE: f64 = 1.0;
const BARCODE_HIT_RATE: f64 = 0.7;

/// Offline stand-in for the recognition backend. Draws labels from the
/// catalog and pretends to find a fixed product behind most barcodes.
#[derive(Debug)]
pub struct SimulatedFoodBackend {
    catalog: &'static NutritionCatalog,
    rng: Mutex<StdRng>,
}

impl SimulatedFoodBackend {
    pub fn new(catalog: &'static NutritionCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    pub fn with_seed(catalog: &'static NutritionCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &'static NutritionCatalog, rng: StdRng) -> Self {
        Self {
            catalog,
            rng: Mutex::new(rng),
        }
    }

    pub fn demo_product() -> ProductRecord {
        ProductRecord {
            name: "Organic Greek Yogurt".to_string(),
            portion: "150g".to_string(),
            calories: 120.0,
            protein: 15.0,
            carbs: 8.0,
            fat: 3.0,
            barcode: Some("5901234123457".to_string()),
        }
    }

    fn simulate_recognition(&self) -> Result<Recognition, CoreError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let count = rng.gen_range(1..=MAX_DETECTIONS);

        let detections = (0..count)
            .map(|_| {
                let label = self
                    .catalog
                    .names()
                    .choose(&mut *rng)
                    .ok_or_else(|| {
                        CoreError::AnalysisFailure("nutrition catalog is empty".to_string())
                    })?;
                let confidence = rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE);
                Ok(Detection::new(vec![RawPrediction::new(label, confidence)]))
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        debug!(count, "simulated recognition");
        Ok(Recognition::new(detections))
    }

    fn simulate_barcode(&self) -> BarcodeLookup {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        if rng.gen_bool(BARCODE_HIT_RATE) {
            BarcodeLookup::Found(Self::demo_product())
        } else {
            BarcodeLookup::NotFound
        }
    }
}

impl RecognitionClient for SimulatedFoodBackend {
    async fn recognize(&self, _image: ImageUpload) -> Result<Recognition, CoreError> {
        self.simulate_recognition()
    }
}

impl BarcodeClient for SimulatedFoodBackend {
    async fn lookup_barcode(&self, _image: ImageUpload) -> Result<BarcodeLookup, CoreError> {
        Ok(self.simulate_barcode())
    }
}
