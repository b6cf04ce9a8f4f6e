//! Quote Query Module
//!
//! - `service` - Lookups, filters, search and aggregates
//! - `stats` - Aggregate statistics type

pub mod service;
pub mod stats;

pub use service::QuoteQueryService;
pub use stats::QuoteStats;
