use axum::{
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Settings;

use super::errors::route_not_found;
use super::handlers::*;
use super::health_handlers::*;
use super::meta_handlers::*;
use super::middleware::log_requests;
use super::openapi::ApiDoc;
use super::state::AppState;

/// Create the API router
///
/// Health routes and the Swagger UI are mounted only when enabled in the
/// settings; CORS applies only when origins are configured. The list,
/// search and health routes also answer with a trailing slash, which is
/// the form existing clients call.
pub fn create_router(state: AppState) -> Router {
    let settings = state.settings.clone();

    let mut api = Router::new()
        // Quote endpoints
        .route("/quotes", get(get_all_quotes))
        .route("/quotes/", get(get_all_quotes))
        .route("/quotes/random", get(get_random_quote))
        .route("/quotes/search", get(search_quotes))
        .route("/quotes/search/", get(search_quotes))
        .route("/quotes/category/:category", get(get_quotes_by_category))
        .route("/quotes/author/:author", get(get_quotes_by_author))
        .route("/quotes/:quote_id", get(get_quote_by_id))
        // Metadata endpoints
        .route("/meta/info", get(get_app_info))
        .route("/meta/stats", get(get_quote_stats))
        .route("/meta/categories", get(get_categories))
        .route("/meta/authors", get(get_authors));

    if settings.enable_health_check {
        api = api
            .route("/health", get(health_check))
            .route("/health/", get(health_check))
            .route("/health/detailed", get(detailed_health_check))
            .route("/health/ping", get(ping));
    }

    let router = Router::new().route("/", get(root));
    let router = if settings.api_v1_prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&settings.api_v1_prefix, api)
    };

    let mut router = router.fallback(route_not_found).with_state(state);

    if settings.enable_docs {
        router = router.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    if let Some(cors) = cors_layer(&settings) {
        router = router.layer(cors);
    }

    router.layer(middleware::from_fn(log_requests))
}

fn cors_layer(settings: &Settings) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = settings
        .cors_allowed_origins()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
    )
}
