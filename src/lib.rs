// Library Crate Root
// lib.rs

// main.rs and the integration tests reach everything through these modules
pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod query;
pub mod store;

// pub use = re-export at crate root
pub use api::{create_router, ApiError, AppState};
pub use config::{ConfigError, Settings};
pub use models::Quote;
pub use query::{QuoteQueryService, QuoteStats};
pub use store::{QuoteStore, StoreError};
