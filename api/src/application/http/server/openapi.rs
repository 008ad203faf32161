use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc,
    health::{__path_health, health},
    nutrition::router::NutritionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriscan API"
    ),
    paths(health),
    nest(
        (path = "/food-analysis", api = FoodAnalysisApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
    )
)]
pub struct ApiDoc;
