use quotes_api::{create_router, logging, AppState, QuoteStore, Settings};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load settings (reads .env if present)
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Invalid configuration ({}): {}", e.key(), e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    logging::init(&settings)?;

    tracing::info!(
        version = %settings.app_version,
        environment = %settings.environment,
        debug = settings.debug,
        "Starting Quotes API"
    );

    // The quote collection is built once, before any request is accepted
    let store = Arc::new(QuoteStore::default());
    tracing::info!("📚 Loaded {} quotes", store.len());

    let addr = settings.bind_addr();
    let prefix = settings.api_v1_prefix.clone();
    let docs_enabled = settings.enable_docs;

    let app = create_router(AppState::new(store, settings));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 Quotes API server running on http://{}", addr);
    tracing::info!("💬 Quotes: http://{}{}/quotes", addr, prefix);
    tracing::info!("📊 Health check: http://{}{}/health", addr, prefix);
    if docs_enabled {
        tracing::info!("📚 Swagger UI: http://{}/docs", addr);
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Shutting down Quotes API");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
    }
}
