use axum::{extract::State, Json};

use crate::query::QuoteStats;

use super::responses::*;
use super::state::AppState;

const DESCRIPTION: &str = "A simple API for serving inspirational quotes";

/// Root endpoint with basic API information
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Welcome document", body = RootResponse)
    )
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Quotes API".to_string(),
        version: state.settings.app_version.clone(),
        docs: state.docs_url(),
        health: state.health_url(),
        quotes: state.api_path("/quotes"),
    })
}

/// Application information
#[utoipa::path(
    get,
    path = "/api/v1/meta/info",
    tag = "Metadata",
    responses(
        (status = 200, description = "Application information", body = AppInfoResponse)
    )
)]
pub async fn get_app_info(State(state): State<AppState>) -> Json<AppInfoResponse> {
    Json(AppInfoResponse {
        name: state.settings.app_name.clone(),
        version: state.settings.app_version.clone(),
        description: DESCRIPTION.to_string(),
        environment: state.settings.environment.clone(),
        api_version: "v1".to_string(),
        docs_url: state.docs_url(),
    })
}

/// Statistics about the quote collection
#[utoipa::path(
    get,
    path = "/api/v1/meta/stats",
    tag = "Metadata",
    responses(
        (status = 200, description = "Quote statistics", body = QuoteStats)
    )
)]
pub async fn get_quote_stats(State(state): State<AppState>) -> Json<QuoteStats> {
    Json(state.quotes.stats())
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/v1/meta/categories",
    tag = "Metadata",
    responses(
        (status = 200, description = "Distinct categories, sorted", body = CategoriesResponse)
    )
)]
pub async fn get_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state.quotes.categories();
    Json(CategoriesResponse {
        count: categories.len(),
        categories,
    })
}

/// List all authors
#[utoipa::path(
    get,
    path = "/api/v1/meta/authors",
    tag = "Metadata",
    responses(
        (status = 200, description = "Distinct authors, sorted", body = AuthorsResponse)
    )
)]
pub async fn get_authors(State(state): State<AppState>) -> Json<AuthorsResponse> {
    let authors = state.quotes.authors();
    Json(AuthorsResponse {
        count: authors.len(),
        authors,
    })
}
