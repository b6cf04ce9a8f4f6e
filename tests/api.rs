use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use quotes_api::{create_router, AppState, QuoteStore, Settings};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(settings: Settings) -> Router {
    create_router(AppState::new(Arc::new(QuoteStore::default()), settings))
}

fn app() -> Router {
    app_with(Settings::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn root_describes_api() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Quotes API");
    assert_eq!(body["quotes"], "/api/v1/quotes");
    assert_eq!(body["health"], "/api/v1/health");
    assert_eq!(body["docs"], "/docs");
}

#[tokio::test]
async fn lists_all_quotes() {
    let (status, body) = get(app(), "/api/v1/quotes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 10);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["message"], "All quotes retrieved successfully");
}

#[tokio::test]
async fn random_quote_envelope() {
    let (status, body) = get(app(), "/api/v1/quotes/random").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["language"], "fr");
    assert!(body["data"]["text"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body.get("count").is_none());
}

#[tokio::test]
async fn quote_by_id() {
    let (status, body) = get(app(), "/api/v1/quotes/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["author"], "Victor Hugo");
    assert_eq!(body["data"]["category"], "Amour");
    assert!(body["data"]["created_at"].is_null());
    assert_eq!(body["message"], "Quote retrieved successfully");
}

#[tokio::test]
async fn quote_by_unknown_id_is_not_found() {
    let (status, body) = get(app(), "/api/v1/quotes/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["error_code"], "QUOTE_NOT_FOUND");
    assert_eq!(body["error"]["details"]["quote_id"], 9999);
    assert_eq!(body["message"], "Quote with ID 9999 not found");
}

#[tokio::test]
async fn quote_by_non_integer_id_is_rejected() {
    let (status, body) = get(app(), "/api/v1/quotes/abc").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["error_code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "quote_id");
}

#[tokio::test]
async fn quotes_by_category_ignores_case() {
    let (status, body) = get(app(), "/api/v1/quotes/category/AMOUR").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["message"], "Quotes from category 'AMOUR' retrieved successfully");
}

#[tokio::test]
async fn quotes_by_accented_category_path() {
    // "Rêves", percent-encoded
    let (status, body) = get(app(), "/api/v1/quotes/category/r%C3%AAves").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], 4);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let (status, body) = get(app(), "/api/v1/quotes/category/Nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No quotes found in category: Nonexistent");
    assert_eq!(body["error"]["details"]["category"], "Nonexistent");
}

#[tokio::test]
async fn quotes_by_author_ignores_case() {
    let (status, body) = get(app(), "/api/v1/quotes/author/victor%20hugo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["author"], "Victor Hugo");

    // partial author names do not match the exact filter
    let (status, _) = get(app(), "/api/v1/quotes/author/hugo").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_text_author_and_category() {
    let (status, body) = get(app(), "/api/v1/quotes/search?q=fleur").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], 1);

    let (_, body) = get(app(), "/api/v1/quotes/search?q=HUGO").await;
    assert_eq!(body["count"], 1);

    let (_, body) = get(app(), "/api/v1/quotes/search?q=albert").await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["message"], "Quotes matching 'albert' retrieved successfully");
}

#[tokio::test]
async fn search_without_matches_is_not_found() {
    let (status, body) = get(app(), "/api/v1/quotes/search?q=NonExistentSearchTerm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["details"]["query"], "NonExistentSearchTerm");
}

#[tokio::test]
async fn search_requires_a_query() {
    let (status, body) = get(app(), "/api/v1/quotes/search").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"]["field"], "q");

    let (status, _) = get(app(), "/api/v1/quotes/search?q=").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn repeated_search_query_is_rejected_with_envelope() {
    let (status, body) = get(app(), "/api/v1/quotes/search?q=a&q=b").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["error_code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "q");
}

#[tokio::test]
async fn undecodable_path_segment_is_rejected_with_envelope() {
    let (status, body) = get(app(), "/api/v1/quotes/category/%FF").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["error_code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "category");
}

#[tokio::test]
async fn trailing_slash_paths_are_served() {
    let (status, body) = get(app(), "/api/v1/quotes/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 10);

    let (status, body) = get(app(), "/api/v1/quotes/search/?q=vie").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["count"].as_u64().is_some_and(|n| n > 0));

    let (status, _) = get(app(), "/api/v1/quotes/search/").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = get(app(), "/api/v1/health/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn meta_stats() {
    let (status, body) = get(app(), "/api/v1/meta/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_quotes"], 10);
    assert_eq!(body["total_categories"], 10);
    assert_eq!(body["total_authors"], 10);
    assert_eq!(body["categories"]["Amour"], 1);
    assert_eq!(body["authors"]["Socrate"], 1);
    assert_eq!(body["language_distribution"]["fr"], 10);
}

#[tokio::test]
async fn meta_categories_and_authors_are_sorted() {
    let (status, body) = get(app(), "/api/v1/meta/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 10);
    let categories: Vec<String> = serde_json::from_value(body["categories"].clone()).unwrap();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);

    let (_, body) = get(app(), "/api/v1/meta/authors").await;
    assert_eq!(body["count"], 10);
    assert_eq!(body["authors"][0], "Albert Camus");
}

#[tokio::test]
async fn meta_info_reflects_settings() {
    let settings = Settings {
        environment: "production".to_string(),
        enable_docs: false,
        ..Settings::default()
    };
    let (status, body) = get(app_with(settings), "/api/v1/meta/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["environment"], "production");
    assert_eq!(body["api_version"], "v1");
    assert!(body["docs_url"].is_null());
}

#[tokio::test]
async fn health_endpoints() {
    let (status, body) = get(app(), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["app_name"], "Arbah Quotes API");

    let (status, body) = get(app(), "/api/v1/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["features"]["docs_enabled"], true);
    assert!(body["system"]["cpus"].as_u64().is_some_and(|n| n >= 1));
    assert!(body["system"]["cpu_percent"].is_number());
    let memory = &body["system"]["memory"];
    assert!(memory["total"].is_u64());
    assert!(memory["available"].is_u64());
    assert!(memory["percent"].as_f64().is_some_and(|p| (0.0..=100.0).contains(&p)));

    let (status, body) = get(app(), "/api/v1/health/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ping"], "pong");
}

#[tokio::test]
async fn health_endpoints_can_be_disabled() {
    let settings = Settings {
        enable_health_check: false,
        ..Settings::default()
    };
    let (status, body) = get(app_with(settings.clone()), "/api/v1/health").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["error_code"], "NOT_FOUND");

    let (_, body) = get(app_with(settings), "/").await;
    assert!(body["health"].is_null());
}

#[tokio::test]
async fn openapi_served_only_when_docs_enabled() {
    let (status, body) = get(app(), "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Quotes API");

    let settings = Settings {
        enable_docs: false,
        ..Settings::default()
    };
    let (status, _) = get(app_with(settings), "/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_prefix() {
    let settings = Settings {
        api_v1_prefix: "/v1".to_string(),
        ..Settings::default()
    };
    let (status, body) = get(app_with(settings.clone()), "/v1/quotes/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 2);

    let (status, _) = get(app_with(settings), "/api/v1/quotes/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_process_time() {
    let response = app()
        .oneshot(Request::builder().uri("/api/v1/quotes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let value = response.headers().get("x-process-time").unwrap();
    assert!(value.to_str().unwrap().parse::<f64>().is_ok());
}

#[tokio::test]
async fn cors_allows_configured_origins() {
    let settings = Settings {
        cors_origins: vec!["https://quotes.example.com".to_string()],
        ..Settings::default()
    };

    let response = app_with(settings.clone())
        .oneshot(
            Request::builder()
                .uri("/api/v1/quotes")
                .header(header::ORIGIN, "https://quotes.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://quotes.example.com"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );

    // the local dev server origin is always added
    let response = app_with(settings.clone())
        .oneshot(
            Request::builder()
                .uri("/api/v1/quotes")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some());

    let response = app_with(settings)
        .oneshot(
            Request::builder()
                .uri("/api/v1/quotes")
                .header(header::ORIGIN, "https://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn cors_disabled_without_origins() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/quotes")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
