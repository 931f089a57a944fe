//! Inclusive price range filter applied after a lookup.

use crate::book::Book;

/// Optional lower and upper price bounds, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Build a range from raw request parameters.
    ///
    /// Anything that does not parse as a finite number is treated as no bound.
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Self {
        Self { min: min.and_then(parse_bound), max: max.and_then(parse_bound) }
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether a single record satisfies the range.
    ///
    /// An unpriced record only passes an unbounded range.
    pub fn contains(&self, book: &Book) -> bool {
        if self.is_unbounded() {
            return true;
        }

        let Some(price) = book.price else {
            return false;
        };

        if let Some(min) = self.min
            && price < min
        {
            return false;
        }

        if let Some(max) = self.max
            && price > max
        {
            return false;
        }

        true
    }

    /// Retain the matching records, preserving order.
    pub fn apply(&self, books: &[Book]) -> Vec<Book> {
        books.iter().filter(|b| self.contains(b)).cloned().collect()
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
