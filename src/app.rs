use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment};
use crate::handlers::{health, prescriptions};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full HTTP application for the given state and configuration
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Protected
        .merge(prescription_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    let router = match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    if config.api.enable_request_logging {
        router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    } else {
        router
    }
}

fn prescription_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/prescriptions",
            get(prescriptions::list).post(prescriptions::create),
        )
        .route("/prescriptions/mine", get(prescriptions::mine))
        .route(
            "/prescriptions/:id",
            get(prescriptions::show)
                .patch(prescriptions::update)
                .delete(prescriptions::delete),
        )
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let security = &config.security;
    if !security.enable_cors {
        return None;
    }
    if config.environment == Environment::Development
        || security.cors_origins.iter().any(|o| o == "*")
    {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
