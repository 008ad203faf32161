use std::sync::Arc;

use crate::application::http::food_analysis::router::food_analysis_routes;
use crate::application::http::health::health_routes;
use crate::application::http::nutrition::router::nutrition_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use nutriscan_core::{application::create_service, domain::common::NutriscanConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = NutriscanConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin '{}': {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", origins);
    AllowOrigin::list(origins)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins(&state.args.server.allowed_origins))
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let router = axum::Router::new()
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(format!("{}/api-docs/openapi.json", root_path), openapi),
        )
        .merge(food_analysis_routes(state.clone()))
        .merge(nutrition_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
