use axum::extract::{Multipart, State};
use nutriscan_core::domain::{
    common::generate_uuid_v7,
    food_analysis::{
        entities::AnalysisResult, ports::FoodAnalysisService, value_objects::ImageUpload,
    },
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, info, info_span};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const IMAGE_FIELD: &str = "image";
const DEFAULT_FILE_NAME: &str = "image";
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Multipart body accepted by [`analyze_food_image`].
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeFoodImageForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze food from image",
    description = "Detects food items in an uploaded photo, falling back to a barcode scan when nothing is recognized",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 400, description = "Missing, empty or oversized image", body = ApiErrorResponse),
        (status = 502, description = "Recognition backend failure", body = ApiErrorResponse),
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(DEFAULT_FILE_NAME).to_string();
        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }
        if data.is_empty() {
            return Err(ApiError::BadRequest("Image is empty".to_string()));
        }

        image = Some(ImageUpload::new(data, file_name, mime_type));
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let span = info_span!("analysis", analysis_id = %generate_uuid_v7());
    let result = state
        .service
        .analyze_food(image)
        .instrument(span.clone())
        .await
        .map_err(ApiError::from)?;

    span.in_scope(|| info!(items = result.detected_items.len(), "analysis complete"));

    Ok(Response::OK(AnalyzeFoodResponse { data: result }))
}
