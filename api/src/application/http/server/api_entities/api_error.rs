use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutriscan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// The upstream recognition or barcode backend failed.
    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::BadGateway(_) => "E_BAD_GATEWAY",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidImage(message) => ApiError::BadRequest(message),
            CoreError::Transport(_) | CoreError::AnalysisFailure(_) => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
