//! Normalized book record returned to clients.
//!
//! Every field has a defined fallback so a sparse catalog item still yields a
//! complete record. Descriptions are capped at [`MAX_DESCRIPTION_CHARS`]
//! characters.

use serde::{Deserialize, Serialize};

/// Maximum description length, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// Label attached to every record.
pub const SOURCE_LABEL: &str = "Google Books";

const MISSING_TITLE: &str = "N/A";
const MISSING_DESCRIPTION: &str = "No description available";
const MISSING_AUTHOR: &str = "Unknown";
const MISSING_PRICE: &str = "N/A";
const MISSING_LINK: &str = "#";

/// A list price as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPrice {
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

/// Normalized book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub price_display: String,
    pub source: String,
    pub link: String,
}

impl Book {
    /// Build a record from optional catalog fields, applying the fallbacks.
    pub fn new(
        title: Option<String>, description: Option<String>, authors: Option<Vec<String>>, price: ListPrice,
        link: Option<String>,
    ) -> Self {
        let description = description
            .filter(|d| !d.is_empty())
            .map(|d| truncate_chars(&d, MAX_DESCRIPTION_CHARS))
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string());

        let price_display = format_price(price.amount, price.currency.as_deref());

        Self {
            title: title.unwrap_or_else(|| MISSING_TITLE.to_string()),
            description,
            authors: authors.unwrap_or_else(|| vec![MISSING_AUTHOR.to_string()]),
            price: price.amount,
            currency: price.currency,
            price_display,
            source: SOURCE_LABEL.to_string(),
            link: link.unwrap_or_else(|| MISSING_LINK.to_string()),
        }
    }

    /// Whether the record carries a numeric price.
    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }
}

/// Whole amounts keep their fractional part (`10.0`), matching the `price` field.
fn format_price(amount: Option<f64>, currency: Option<&str>) -> String {
    match (amount, currency) {
        (Some(amount), Some(currency)) => format!("{amount:?} {currency}"),
        (Some(amount), None) => format!("{amount:?}"),
        (None, _) => MISSING_PRICE.to_string(),
    }
}

/// Keep at most `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
