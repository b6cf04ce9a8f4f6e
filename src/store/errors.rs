//! Error types for quote store construction

use thiserror::Error;

/// Errors that can occur while building a `QuoteStore`
///
/// Once a store exists none of these can happen: every query runs against
/// records that already passed these checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The seed list contained no quotes
    #[error("Quote store cannot be empty")]
    Empty,

    /// A quote at the given position has no id
    #[error("Quote at position {0} has no id")]
    MissingId(usize),

    /// Ids must be positive
    #[error("Invalid quote id: {0}")]
    InvalidId(i64),

    /// Two quotes share the same id
    #[error("Duplicate quote id: {0}")]
    DuplicateId(i64),

    /// A field broke its length or emptiness constraint
    #[error("Invalid field `{field}` on quote {id}: {reason}")]
    InvalidField {
        id: i64,
        field: &'static str,
        reason: String,
    },
}
