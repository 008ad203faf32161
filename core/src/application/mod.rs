use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::{
    domain::{
        common::{FallbackMode, NutriscanConfig},
        food_analysis::{fallback::WithFallback, services::AnalysisCoordinator},
        nutrition::catalog,
    },
    infrastructure::{
        food_backend::FoodBackendClient, notifications::TracingNotificationSink,
        simulated::SimulatedFoodBackend,
    },
};

pub type NutriscanBackend =
    WithFallback<FoodBackendClient, SimulatedFoodBackend, TracingNotificationSink>;

pub type NutriscanService =
    AnalysisCoordinator<NutriscanBackend, NutriscanBackend, TracingNotificationSink>;

pub fn create_service(config: NutriscanConfig) -> Result<NutriscanService, anyhow::Error> {
    let notifier = Arc::new(TracingNotificationSink);

    let live = FoodBackendClient::new(&config.backend)
        .context("failed to create food backend client")?;

    let fallback = match config.fallback.mode {
        FallbackMode::Simulated => Some(match config.fallback.seed {
            Some(seed) => SimulatedFoodBackend::with_seed(catalog(), seed),
            None => SimulatedFoodBackend::new(catalog()),
        }),
        FallbackMode::Disabled => None,
    };

    info!(
        backend_url = %config.backend.base_url,
        fallback = ?config.fallback.mode,
        "food analysis service ready"
    );

    let backend = Arc::new(WithFallback::new(live, fallback, Arc::clone(&notifier)));

    Ok(AnalysisCoordinator::new(
        Arc::clone(&backend),
        backend,
        notifier,
        catalog(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{BackendConfig, FallbackConfig, entities::app_errors::CoreError},
        food_analysis::{ports::FoodAnalysisService, value_objects::ImageUpload},
    };
    use wiremock::MockServer;

    async fn unreachable_url() -> String {
        let server = MockServer::start().await;
        let url = server.uri();
        drop(server);
        url
    }

    fn config(base_url: String, mode: FallbackMode) -> NutriscanConfig {
        NutriscanConfig {
            backend: BackendConfig {
                base_url,
                request_timeout_secs: 5,
            },
            fallback: FallbackConfig {
                mode,
                seed: Some(3),
            },
        }
    }

    fn image() -> ImageUpload {
        ImageUpload::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "dinner.jpg", "image/jpeg")
    }

    #[tokio::test]
    async fn test_unreachable_backend_falls_back_to_simulation() {
        let service =
            create_service(config(unreachable_url().await, FallbackMode::Simulated)).unwrap();

        let result = service.analyze_food(image()).await.unwrap();

        assert!((1..=3).contains(&result.detected_items.len()));
        for item in &result.detected_items {
            assert!(catalog().lookup(&item.name).is_some());
            let confidence = item.confidence.unwrap();
            assert!((0.7..=1.0).contains(&confidence));
        }
        assert!(result.ai_summary.starts_with("Detected "));
    }

    #[tokio::test]
    async fn test_unreachable_backend_without_fallback_fails() {
        let service =
            create_service(config(unreachable_url().await, FallbackMode::Disabled)).unwrap();

        let result = service.analyze_food(image()).await;

        assert!(matches!(result, Err(CoreError::AnalysisFailure(_))));
    }

    #[tokio::test]
    async fn test_unusable_mime_type_is_invalid_image_even_with_fallback() {
        let service =
            create_service(config(unreachable_url().await, FallbackMode::Simulated)).unwrap();
        let upload = ImageUpload::new(vec![0xFF, 0xD8], "dinner.jpg", "not a mime type");

        let result = service.analyze_food(upload).await;

        assert!(matches!(result, Err(CoreError::InvalidImage(_))));
    }
}
