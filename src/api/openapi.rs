use utoipa::OpenApi;

use crate::api::{handlers, health_handlers, meta_handlers};
use crate::api::responses::*;
use crate::models::Quote;
use crate::query::QuoteStats;

/// OpenAPI v1 specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quotes API",
        version = "1.0.0",
        description = "A small read-only API serving inspirational quotes",
        license(
            name = "MIT"
        )
    ),
    paths(
        meta_handlers::root,
        handlers::get_random_quote,
        handlers::get_all_quotes,
        handlers::get_quote_by_id,
        handlers::get_quotes_by_category,
        handlers::get_quotes_by_author,
        handlers::search_quotes,
        meta_handlers::get_app_info,
        meta_handlers::get_quote_stats,
        meta_handlers::get_categories,
        meta_handlers::get_authors,
        health_handlers::health_check,
        health_handlers::detailed_health_check,
        health_handlers::ping,
    ),
    components(
        schemas(
            Quote,
            QuoteStats,
            QuoteResponse,
            QuoteListResponse,
            ErrorResponse,
            ErrorDetail,
            RootResponse,
            AppInfoResponse,
            CategoriesResponse,
            AuthorsResponse,
            HealthResponse,
            DetailedHealthResponse,
            SystemInfo,
            MemoryInfo,
            FeatureFlags,
            PingResponse,
        )
    ),
    tags(
        (name = "Root", description = "Service entry point"),
        (name = "Quotes", description = "Quote lookup, filter and search endpoints"),
        (name = "Metadata", description = "Collection metadata and statistics"),
        (name = "Health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
