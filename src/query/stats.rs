use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Aggregate statistics over the quote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuoteStats {
    #[schema(example = 10)]
    pub total_quotes: usize,
    #[schema(example = 10)]
    pub total_categories: usize,
    #[schema(example = 10)]
    pub total_authors: usize,
    /// Quote count per category
    pub categories: BTreeMap<String, usize>,
    /// Quote count per author
    pub authors: BTreeMap<String, usize>,
    /// Quote count per language tag
    pub language_distribution: BTreeMap<String, usize>,
}
