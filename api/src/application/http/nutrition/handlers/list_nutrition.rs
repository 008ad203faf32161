use nutriscan_core::domain::nutrition::catalog;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListNutritionResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "nutrition",
    summary = "List catalog dishes",
    responses(
        (status = 200, body = ListNutritionResponse)
    ),
)]
pub async fn list_nutrition() -> Response<ListNutritionResponse> {
    Response::OK(ListNutritionResponse {
        data: catalog().names().map(str::to_string).collect(),
    })
}
