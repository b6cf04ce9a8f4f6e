//! Quote Store Module
//!
//! - `errors` - Errors raised while building a store
//! - `seed` - The built-in quote collection
//! - `quote_store` - Immutable, order-preserving quote collection

pub mod errors;
pub mod quote_store;
pub mod seed;

pub use errors::StoreError;
pub use quote_store::QuoteStore;
pub use seed::seed_quotes;
