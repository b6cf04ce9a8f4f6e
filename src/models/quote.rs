use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum length of a quote text, in characters
pub const MAX_TEXT_LEN: usize = 1000;
/// Maximum length of an author name, in characters
pub const MAX_AUTHOR_LEN: usize = 100;
/// Maximum length of a category tag, in characters
pub const MAX_CATEGORY_LEN: usize = 50;
/// Maximum length of a language tag, in characters
pub const MAX_LANGUAGE_LEN: usize = 5;
/// Language tag carried by every seeded quote
pub const DEFAULT_LANGUAGE: &str = "fr";

/// A single quotation
///
/// `author` and `category` are plain string tags on the record, not
/// references to separate entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "La vie est une fleur dont l'amour est le miel.")]
    pub text: String,
    #[schema(example = "Victor Hugo")]
    pub author: Option<String>,
    #[schema(example = "Amour")]
    pub category: Option<String>,
    #[serde(default = "default_language")]
    #[schema(example = "fr")]
    pub language: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// A field that failed `Quote::validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl Quote {
    /// Create a quote with the default language and no timestamps
    pub fn new(
        id: i64,
        text: impl Into<String>,
        author: Option<&str>,
        category: Option<&str>,
    ) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
            author: author.map(str::to_string),
            category: category.map(str::to_string),
            language: default_language(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Check the field length constraints
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> Result<(), FieldViolation> {
        if self.text.is_empty() {
            return Err(FieldViolation {
                field: "text",
                reason: "must not be empty".to_string(),
            });
        }
        check_len("text", &self.text, MAX_TEXT_LEN)?;
        if let Some(author) = &self.author {
            check_len("author", author, MAX_AUTHOR_LEN)?;
        }
        if let Some(category) = &self.category {
            check_len("category", category, MAX_CATEGORY_LEN)?;
        }
        check_len("language", &self.language, MAX_LANGUAGE_LEN)
    }

    /// Case-insensitive whole-string match on the category
    pub fn has_category(&self, folded: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == folded)
    }

    /// Case-insensitive whole-string match on the author
    pub fn has_author(&self, folded: &str) -> bool {
        self.author
            .as_deref()
            .is_some_and(|a| a.to_lowercase() == folded)
    }

    /// Case-insensitive substring match on text, author or category
    ///
    /// `folded` must already be lowercased. Absent fields never match.
    pub fn mentions(&self, folded: &str) -> bool {
        self.text.to_lowercase().contains(folded)
            || self
                .author
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(folded))
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(folded))
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), FieldViolation> {
    let len = value.chars().count();
    if len > max {
        return Err(FieldViolation {
            field,
            reason: format!("length {} exceeds maximum of {}", len, max),
        });
    }
    Ok(())
}
