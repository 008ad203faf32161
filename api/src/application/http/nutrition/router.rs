use super::handlers::{
    get_nutrition::{__path_get_nutrition, get_nutrition},
    list_nutrition::{__path_list_nutrition, list_nutrition},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_nutrition, get_nutrition))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition", state.args.server.root_path),
            get(list_nutrition),
        )
        .route(
            &format!("{}/nutrition/{{name}}", state.args.server.root_path),
            get(get_nutrition),
        )
}
