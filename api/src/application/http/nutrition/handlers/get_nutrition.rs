use axum::extract::Path;
use nutriscan_core::domain::nutrition::{NutritionRecord, catalog};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{
    api_error::{ApiError, ApiErrorResponse},
    response::Response,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NutritionEntry {
    pub name: String,
    #[serde(flatten)]
    pub record: NutritionRecord,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetNutritionResponse {
    pub data: NutritionEntry,
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "nutrition",
    summary = "Look up a dish",
    description = "Returns the reference nutrition of a catalog dish. The name is matched case-insensitively.",
    params(
        ("name" = String, Path, description = "Dish name"),
    ),
    responses(
        (status = 200, body = GetNutritionResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_nutrition(
    Path(name): Path<String>,
) -> Result<Response<GetNutritionResponse>, ApiError> {
    let (canonical, record) = catalog()
        .lookup_entry(&name)
        .ok_or_else(|| ApiError::NotFound(format!("No nutrition data for '{}'", name)))?;

    Ok(Response::OK(GetNutritionResponse {
        data: NutritionEntry {
            name: canonical.to_string(),
            record: *record,
        },
    }))
}
