use std::time::Duration;

use reqwest::{
    Client, StatusCode,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::{
    domain::{
        common::{BackendConfig, entities::app_errors::CoreError},
        food_analysis::{
            entities::{ProductRecord, Recognition},
            ports::{BarcodeClient, RecognitionClient},
            value_objects::{BarcodeLookup, ImageUpload},
        },
    },
    infrastructure::food_backend::mappers::{BarcodeResponse, PredictResponse},
};

const PREDICT_PATH: &str = "/predict";
const BARCODE_PATH: &str = "/upload";

/// Client for the recognition backend serving both `/predict` and `/upload`.
#[derive(Debug, Clone)]
pub struct FoodBackendClient {
    base_url: String,
    client: Client,
}

impl FoodBackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn image_form(image: ImageUpload) -> Result<Form, CoreError> {
        let part = Part::bytes(image.data.to_vec())
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| CoreError::InvalidImage(format!("unsupported mime type: {}", e)))?;

        Ok(Form::new().part("image", part))
    }

    async fn post_image(
        &self,
        path: &str,
        image: ImageUpload,
    ) -> Result<reqwest::Response, CoreError> {
        let url = format!("{}{}", self.base_url, path);
        let form = Self::image_form(image)?;

        self.client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Food backend request to {} failed: {}", url, e);
                CoreError::Transport(format!("request to {} failed: {}", url, e))
            })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CoreError> {
        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse food backend response: {}", e);
            CoreError::Transport(format!("malformed response body: {}", e))
        })
    }

    fn unexpected_status(status: StatusCode) -> CoreError {
        error!("Food backend responded with status: {}", status);
        CoreError::Transport(format!("server responded with status: {}", status))
    }
}

impl RecognitionClient for FoodBackendClient {
    async fn recognize(&self, image: ImageUpload) -> Result<Recognition, CoreError> {
        let response = self.post_image(PREDICT_PATH, image).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::unexpected_status(status));
        }

        let body: PredictResponse = Self::read_json(response).await?;
        debug!(predictions = body.predictions.len(), "received predictions");

        Ok(Recognition::from(body))
    }
}

impl BarcodeClient for FoodBackendClient {
    async fn lookup_barcode(&self, image: ImageUpload) -> Result<BarcodeLookup, CoreError> {
        let response = self.post_image(BARCODE_PATH, image).await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            info!("No barcode found in the image");
            return Ok(BarcodeLookup::NotFound);
        }
        if !status.is_success() {
            return Err(Self::unexpected_status(status));
        }

        let body: BarcodeResponse = Self::read_json(response).await?;

        Ok(BarcodeLookup::Found(ProductRecord::from(body)))
    }
}
