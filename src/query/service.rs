//! Quote Query Service
//!
//! Read-only lookups, filters, search and aggregates over a `QuoteStore`.
//! Every operation is a linear scan; the collection is small and fixed.
//!
//! Matching rules:
//! - `by_category` / `by_author` compare the whole string after lowercasing
//! - `search` looks for the lowercased query as a substring of text, author
//!   or category, and any one field is enough
//!
//! "No match" is never an error: lookups return `None`, filters return an
//! empty `Vec`.

use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::models::Quote;
use crate::store::QuoteStore;

use super::stats::QuoteStats;

/// Stateless query operations over a shared quote store
#[derive(Debug, Clone)]
pub struct QuoteQueryService {
    store: Arc<QuoteStore>,
}

impl QuoteQueryService {
    pub fn new(store: Arc<QuoteStore>) -> Self {
        Self { store }
    }

    /// Pick one quote uniformly at random
    pub fn random_quote(&self) -> &Quote {
        self.random_quote_with(&mut rand::rng())
    }

    /// Pick one quote using the supplied generator
    ///
    /// Panics only if the store is empty, which `QuoteStore` rules out.
    pub fn random_quote_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        let quotes = self.store.all();
        &quotes[rng.random_range(0..quotes.len())]
    }

    /// Find a quote by id
    pub fn by_id(&self, id: i64) -> Option<&Quote> {
        self.store.all().iter().find(|q| q.id == Some(id))
    }

    /// Every quote, in store order
    pub fn all(&self) -> &[Quote] {
        self.store.all()
    }

    /// Quotes whose category equals `category`, ignoring case
    pub fn by_category(&self, category: &str) -> Vec<&Quote> {
        let folded = category.to_lowercase();
        self.filter(|q| q.has_category(&folded))
    }

    /// Quotes whose author equals `author`, ignoring case
    pub fn by_author(&self, author: &str) -> Vec<&Quote> {
        let folded = author.to_lowercase();
        self.filter(|q| q.has_author(&folded))
    }

    /// Quotes mentioning `query` in their text, author or category, ignoring case
    ///
    /// Callers reject empty queries; an empty query would match everything.
    pub fn search(&self, query: &str) -> Vec<&Quote> {
        let folded = query.to_lowercase();
        self.filter(|q| q.mentions(&folded))
    }

    /// Distinct categories, sorted ascending
    pub fn categories(&self) -> Vec<String> {
        distinct(self.store.all().iter().filter_map(|q| q.category.as_deref()))
    }

    /// Distinct authors, sorted ascending
    pub fn authors(&self) -> Vec<String> {
        distinct(self.store.all().iter().filter_map(|q| q.author.as_deref()))
    }

    /// Number of quotes `by_category` returns for each distinct category
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        self.categories()
            .into_iter()
            .map(|category| {
                let count = self.by_category(&category).len();
                (category, count)
            })
            .collect()
    }

    /// Number of quotes `by_author` returns for each distinct author
    pub fn author_counts(&self) -> BTreeMap<String, usize> {
        self.authors()
            .into_iter()
            .map(|author| {
                let count = self.by_author(&author).len();
                (author, count)
            })
            .collect()
    }

    /// Number of quotes per language tag
    pub fn language_distribution(&self) -> BTreeMap<String, usize> {
        let mut distribution = BTreeMap::new();
        for quote in self.store.all() {
            *distribution.entry(quote.language.clone()).or_insert(0) += 1;
        }
        distribution
    }

    /// Aggregate view of the whole collection
    pub fn stats(&self) -> QuoteStats {
        let categories = self.category_counts();
        let authors = self.author_counts();

        QuoteStats {
            total_quotes: self.store.len(),
            total_categories: categories.len(),
            total_authors: authors.len(),
            categories,
            authors,
            language_distribution: self.language_distribution(),
        }
    }

    fn filter<P>(&self, predicate: P) -> Vec<&Quote>
    where
        P: Fn(&Quote) -> bool,
    {
        self.store.all().iter().filter(|q| predicate(q)).collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
