//! Quote Store
//!
//! Holds every quote the service knows about. The collection is fixed at
//! construction and only ever handed out as a shared slice, so it can be
//! read from any number of request handlers without locking.

use std::collections::HashSet;

use crate::models::Quote;

use super::errors::StoreError;
use super::seed::seed_quotes;

/// Immutable, order-preserving collection of quotes
///
/// Invariants: never empty, every quote has a unique positive id and
/// satisfies `Quote::validate`.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Build a store from an arbitrary list of quotes, checking every invariant
    pub fn try_new(quotes: Vec<Quote>) -> Result<Self, StoreError> {
        if quotes.is_empty() {
            return Err(StoreError::Empty);
        }

        let mut seen = HashSet::with_capacity(quotes.len());
        for (position, quote) in quotes.iter().enumerate() {
            let id = quote.id.ok_or(StoreError::MissingId(position))?;
            if id <= 0 {
                return Err(StoreError::InvalidId(id));
            }
            if !seen.insert(id) {
                return Err(StoreError::DuplicateId(id));
            }
            quote
                .validate()
                .map_err(|violation| StoreError::InvalidField {
                    id,
                    field: violation.field,
                    reason: violation.reason,
                })?;
        }

        Ok(Self { quotes })
    }

    /// Every quote, in seed order
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false for a constructed store; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl Default for QuoteStore {
    /// The built-in collection
    fn default() -> Self {
        Self {
            quotes: seed_quotes(),
        }
    }
}
