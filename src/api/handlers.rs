use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::errors::ApiError;
use super::responses::*;
use super::state::AppState;

/// Query parameters for quote search
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to look for in quote text, author or category
    pub q: Option<String>,
}

/// Get a random quote
#[utoipa::path(
    get,
    path = "/api/v1/quotes/random",
    tag = "Quotes",
    responses(
        (status = 200, description = "A random quote", body = QuoteResponse)
    )
)]
pub async fn get_random_quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    let quote = state.quotes.random_quote();
    Json(QuoteResponse::new(quote, "Random quote retrieved successfully"))
}

/// Get all quotes
#[utoipa::path(
    get,
    path = "/api/v1/quotes",
    tag = "Quotes",
    responses(
        (status = 200, description = "Every quote, in collection order", body = QuoteListResponse)
    )
)]
pub async fn get_all_quotes(State(state): State<AppState>) -> Json<QuoteListResponse> {
    Json(QuoteListResponse::new(
        state.quotes.all(),
        "All quotes retrieved successfully",
    ))
}

/// Get a quote by ID
#[utoipa::path(
    get,
    path = "/api/v1/quotes/{quote_id}",
    tag = "Quotes",
    params(
        ("quote_id" = i64, Path, description = "Quote ID")
    ),
    responses(
        (status = 200, description = "Quote found", body = QuoteResponse),
        (status = 404, description = "Quote not found", body = ErrorResponse),
        (status = 422, description = "ID is not an integer", body = ErrorResponse)
    )
)]
pub async fn get_quote_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Path(quote_id) =
        path.map_err(|rejection| ApiError::invalid_path("quote_id", &rejection))?;
    let id = parse_quote_id(&quote_id)?;
    let quote = state
        .quotes
        .by_id(id)
        .ok_or_else(|| ApiError::quote_not_found(id))?;

    Ok(Json(QuoteResponse::new(quote, "Quote retrieved successfully")))
}

/// Get quotes by category
#[utoipa::path(
    get,
    path = "/api/v1/quotes/category/{category}",
    tag = "Quotes",
    params(
        ("category" = String, Path, description = "Category, matched exactly but ignoring case")
    ),
    responses(
        (status = 200, description = "Quotes in the category", body = QuoteListResponse),
        (status = 404, description = "No quote in the category", body = ErrorResponse),
        (status = 422, description = "Category is not valid UTF-8", body = ErrorResponse)
    )
)]
pub async fn get_quotes_by_category(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<QuoteListResponse>, ApiError> {
    let Path(category) =
        path.map_err(|rejection| ApiError::invalid_path("category", &rejection))?;
    let quotes = state.quotes.by_category(&category);
    if quotes.is_empty() {
        return Err(ApiError::no_matches(
            format!("No quotes found in category: {}", category),
            "category",
            &category,
        ));
    }

    Ok(Json(QuoteListResponse::new(
        quotes,
        format!("Quotes from category '{}' retrieved successfully", category),
    )))
}

/// Get quotes by author
#[utoipa::path(
    get,
    path = "/api/v1/quotes/author/{author}",
    tag = "Quotes",
    params(
        ("author" = String, Path, description = "Author, matched exactly but ignoring case")
    ),
    responses(
        (status = 200, description = "Quotes by the author", body = QuoteListResponse),
        (status = 404, description = "No quote by the author", body = ErrorResponse),
        (status = 422, description = "Author is not valid UTF-8", body = ErrorResponse)
    )
)]
pub async fn get_quotes_by_author(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<QuoteListResponse>, ApiError> {
    let Path(author) =
        path.map_err(|rejection| ApiError::invalid_path("author", &rejection))?;
    let quotes = state.quotes.by_author(&author);
    if quotes.is_empty() {
        return Err(ApiError::no_matches(
            format!("No quotes found from author: {}", author),
            "author",
            &author,
        ));
    }

    Ok(Json(QuoteListResponse::new(
        quotes,
        format!("Quotes from author '{}' retrieved successfully", author),
    )))
}

/// Search quotes by text, author or category
#[utoipa::path(
    get,
    path = "/api/v1/quotes/search",
    tag = "Quotes",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching quotes", body = QuoteListResponse),
        (status = 404, description = "Nothing matched", body = ErrorResponse),
        (status = 422, description = "Missing, empty or malformed query", body = ErrorResponse)
    )
)]
pub async fn search_quotes(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<QuoteListResponse>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::invalid_query("q", &rejection))?;
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        other => {
            return Err(ApiError::validation(
                "q",
                other.as_deref(),
                "Search query must contain at least 1 character",
            ))
        }
    };

    let quotes = state.quotes.search(&query);
    if quotes.is_empty() {
        return Err(ApiError::no_matches(
            format!("No quotes found matching: {}", query),
            "query",
            &query,
        ));
    }

    Ok(Json(QuoteListResponse::new(
        quotes,
        format!("Quotes matching '{}' retrieved successfully", query),
    )))
}

fn parse_quote_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| {
        ApiError::validation("quote_id", Some(raw), "Quote ID must be an integer")
    })
}
