use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        assembler::ResultAssembler,
        entities::AnalysisResult,
        health_tips::HealthTip,
        ports::{BarcodeClient, FoodAnalysisService, NotificationSink, RecognitionClient},
        value_objects::{
            ANALYZING_NOTICE, BarcodeLookup, ImageUpload, NO_BARCODE_NOTICE, Notice,
            SCANNING_NOTICE,
        },
    },
    nutrition::NutritionCatalog,
};

/// Per-invocation progress of an analysis.
#[derive(Debug)]
enum AnalysisState {
    Start,
    TryBarcode(AnalysisResult),
    Summarize(AnalysisResult),
    Done(AnalysisResult),
}

/// Orchestrates recognition, the barcode retry and the health tip for one image.
pub struct AnalysisCoordinator<R, B, N> {
    recognition_client: Arc<R>,
    barcode_client: Arc<B>,
    notifier: Arc<N>,
    catalog: &'static NutritionCatalog,
}

impl<R, B, N> Clone for AnalysisCoordinator<R, B, N> {
    fn clone(&self) -> Self {
        Self {
            recognition_client: Arc::clone(&self.recognition_client),
            barcode_client: Arc::clone(&self.barcode_client),
            notifier: Arc::clone(&self.notifier),
            catalog: self.catalog,
        }
    }
}

impl<R, B, N> AnalysisCoordinator<R, B, N>
where
    R: RecognitionClient,
    B: BarcodeClient,
    N: NotificationSink,
{
    pub fn new(
        recognition_client: Arc<R>,
        barcode_client: Arc<B>,
        notifier: Arc<N>,
        catalog: &'static NutritionCatalog,
    ) -> Self {
        Self {
            recognition_client,
            barcode_client,
            notifier,
            catalog,
        }
    }

    async fn step(
        &self,
        state: AnalysisState,
        image: &ImageUpload,
    ) -> Result<AnalysisState, CoreError> {
        let assembler = ResultAssembler::new(self.catalog);

        let next = match state {
            AnalysisState::Start => {
                self.notifier.notify(Notice::info(ANALYZING_NOTICE));
                let recognition = self.recognition_client.recognize(image.clone()).await?;
                debug!(detections = recognition.detections.len(), "recognition finished");

                let result = assembler.analyze(&recognition.detections);
                if result.is_empty() {
                    AnalysisState::TryBarcode(result)
                } else {
                    AnalysisState::Summarize(result)
                }
            }
            AnalysisState::TryBarcode(result) => {
                self.notifier.notify(Notice::info(SCANNING_NOTICE));
                match self.barcode_client.lookup_barcode(image.clone()).await? {
                    BarcodeLookup::Found(product) => {
                        AnalysisState::Summarize(assembler.from_product(product))
                    }
                    BarcodeLookup::NotFound => {
                        self.notifier.notify(Notice::error(NO_BARCODE_NOTICE));
                        AnalysisState::Summarize(result)
                    }
                }
            }
            AnalysisState::Summarize(mut result) => {
                if !result.is_empty() {
                    let tip = HealthTip::advise(&result.detected_items);
                    result.ai_summary.push(' ');
                    result.ai_summary.push_str(tip.message());
                }
                AnalysisState::Done(result)
            }
            done @ AnalysisState::Done(_) => done,
        };

        Ok(next)
    }
}

impl<R, B, N> FoodAnalysisService for AnalysisCoordinator<R, B, N>
where
    R: RecognitionClient,
    B: BarcodeClient,
    N: NotificationSink,
{
    #[instrument(skip(self, image), fields(file_name = %image.file_name, size = image.data.len()))]
    async fn analyze_food(&self, image: ImageUpload) -> Result<AnalysisResult, CoreError> {
        if image.is_empty() {
            return Err(CoreError::AnalysisFailure("image payload is empty".to_string()));
        }

        let mut state = AnalysisState::Start;
        loop {
            state = self.step(state, &image).await.map_err(|e| {
                error!("Food analysis failed: {}", e);
                match e {
                    CoreError::AnalysisFailure(_) | CoreError::InvalidImage(_) => e,
                    other => CoreError::AnalysisFailure(other.to_string()),
                }
            })?;

            if let AnalysisState::Done(result) = state {
                return Ok(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food_analysis::{
            assembler::NOTHING_DETECTED_SUMMARY,
            entities::{Detection, ProductRecord, RawPrediction, Recognition},
            ports::{MockBarcodeClient, MockNotificationSink, MockRecognitionClient},
            value_objects::NoticeLevel,
        },
        nutrition::catalog,
    };

    fn image() -> ImageUpload {
        ImageUpload::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "plate.jpg", "image/jpeg")
    }

    fn quiet_notifier() -> MockNotificationSink {
        let mut notifier = MockNotificationSink::new();
        notifier.expect_notify().return_const(());
        notifier
    }

    fn recognizing(recognition: Recognition) -> MockRecognitionClient {
        let mut client = MockRecognitionClient::new();
        client
            .expect_recognize()
            .times(1)
            .returning(move |_| {
                let recognition = recognition.clone();
                Box::pin(async move { Ok(recognition) })
            });
        client
    }

    fn coordinator(
        recognition: MockRecognitionClient,
        barcode: MockBarcodeClient,
        notifier: MockNotificationSink,
    ) -> AnalysisCoordinator<MockRecognitionClient, MockBarcodeClient, MockNotificationSink> {
        AnalysisCoordinator::new(
            Arc::new(recognition),
            Arc::new(barcode),
            Arc::new(notifier),
            catalog(),
        )
    }

    #[tokio::test]
    async fn test_dal_scenario() {
        let recognition = recognizing(Recognition::new(vec![Detection::new(vec![
            RawPrediction::new("Dal", 0.9),
        ])]));
        let mut barcode = MockBarcodeClient::new();
        barcode.expect_lookup_barcode().times(0);

        let result = coordinator(recognition, barcode, quiet_notifier())
            .analyze_food(image())
            .await
            .unwrap();

        assert_eq!(result.detected_items.len(), 1);
        let item = &result.detected_items[0];
        assert_eq!(item.name, "Dal");
        assert_eq!(item.calories, 116.0);
        assert_eq!(item.protein, 9.0);
        assert_eq!(item.carbs, 20.0);
        assert_eq!(item.fat, 0.4);
        assert_eq!(item.portion, "175g");
        assert_eq!(item.confidence, Some(0.9));
        assert_eq!(
            result.ai_summary,
            "Detected 1 item: Dal. Approx 116 calories. Remember to aim for a balanced meal with protein, complex carbs, and healthy fats."
        );
    }

    #[tokio::test]
    async fn test_nothing_detected_and_no_barcode() {
        let recognition = recognizing(Recognition::empty());
        let mut barcode = MockBarcodeClient::new();
        barcode
            .expect_lookup_barcode()
            .times(1)
            .returning(|_| Box::pin(async { Ok(BarcodeLookup::NotFound) }));
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_notify()
            .withf(|notice| notice.level == NoticeLevel::Info)
            .times(2)
            .return_const(());
        notifier
            .expect_notify()
            .withf(|notice| {
                notice.level == NoticeLevel::Error && notice.message == NO_BARCODE_NOTICE
            })
            .times(1)
            .return_const(());

        let result = coordinator(recognition, barcode, notifier)
            .analyze_food(image())
            .await
            .unwrap();

        assert!(result.detected_items.is_empty());
        assert_eq!(result.ai_summary, NOTHING_DETECTED_SUMMARY);
    }

    #[tokio::test]
    async fn test_barcode_replaces_empty_recognition() {
        let recognition = recognizing(Recognition::empty());
        let mut barcode = MockBarcodeClient::new();
        barcode.expect_lookup_barcode().times(1).returning(|_| {
            Box::pin(async {
                Ok(BarcodeLookup::Found(ProductRecord {
                    name: "Organic Greek Yogurt".to_string(),
                    portion: "150g".to_string(),
                    calories: 120.0,
                    protein: 15.0,
                    carbs: 8.0,
                    fat: 3.0,
                    barcode: None,
                }))
            })
        });

        let result = coordinator(recognition, barcode, quiet_notifier())
            .analyze_food(image())
            .await
            .unwrap();

        assert_eq!(result.detected_items.len(), 1);
        assert_eq!(result.detected_items[0].confidence, None);
        assert_eq!(result.detected_items[0].calories, 120.0);
        assert_eq!(
            result.ai_summary,
            "Detected a barcode for Organic Greek Yogurt. Approx 120 calories. Remember to aim for a balanced meal with protein, complex carbs, and healthy fats."
        );
    }

    #[tokio::test]
    async fn test_multiple_items_get_protein_tip() {
        let recognition = recognizing(Recognition::new(vec![
            Detection::new(vec![RawPrediction::new("Jalebi", 0.8)]),
            Detection::new(vec![RawPrediction::new("Chai", 0.9)]),
        ]));
        let mut barcode = MockBarcodeClient::new();
        barcode.expect_lookup_barcode().times(0);

        let result = coordinator(recognition, barcode, quiet_notifier())
            .analyze_food(image())
            .await
            .unwrap();

        assert_eq!(
            result.ai_summary,
            "Detected 2 items: Jalebi, Chai. Approx 413 calories. Consider adding a protein source to create a more balanced meal."
        );
    }

    #[tokio::test]
    async fn test_recognition_error_becomes_analysis_failure() {
        let mut recognition = MockRecognitionClient::new();
        recognition.expect_recognize().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::Transport("connection refused".to_string())) })
        });
        let mut barcode = MockBarcodeClient::new();
        barcode.expect_lookup_barcode().times(0);

        let result = coordinator(recognition, barcode, quiet_notifier())
            .analyze_food(image())
            .await;

        assert!(matches!(result, Err(CoreError::AnalysisFailure(_))));
    }

    #[tokio::test]
    async fn test_barcode_error_becomes_analysis_failure() {
        let recognition = recognizing(Recognition::empty());
        let mut barcode = MockBarcodeClient::new();
        barcode.expect_lookup_barcode().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::Transport("503 Service Unavailable".to_string())) })
        });

        let result = coordinator(recognition, barcode, quiet_notifier())
            .analyze_food(image())
            .await;

        assert!(matches!(result, Err(CoreError::AnalysisFailure(_))));
    }

    #[tokio::test]
    async fn test_invalid_image_is_not_wrapped() {
        let mut recognition = MockRecognitionClient::new();
        recognition.expect_recognize().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::InvalidImage("bad mime".to_string())) })
        });
        let mut barcode = MockBarcodeClient::new();
        barcode.expect_lookup_barcode().times(0);

        let result = coordinator(recognition, barcode, quiet_notifier())
            .analyze_food(image())
            .await;

        assert_eq!(result, Err(CoreError::InvalidImage("bad mime".to_string())));
    }

    #[tokio::test]
    async fn test_empty_image_is_rejected_before_any_call() {
        let mut recognition = MockRecognitionClient::new();
        recognition.expect_recognize().times(0);
        let mut barcode = MockBarcodeClient::new();
        barcode.expect_lookup_barcode().times(0);
        let mut notifier = MockNotificationSink::new();
        notifier.expect_notify().times(0);

        let result = coordinator(recognition, barcode, notifier)
            .analyze_food(ImageUpload::new(Vec::new(), "empty.jpg", "image/jpeg"))
            .await;

        assert!(matches!(result, Err(CoreError::AnalysisFailure(_))));
    }
}
