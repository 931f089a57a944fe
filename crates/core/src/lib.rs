//! Core types and shared functionality for bookshelf.
//!
//! This crate provides:
//! - The normalized book record and price range filter
//! - The single-slot lookup cache and the source trait it wraps
//! - Unified error types
//! - Configuration structures

pub mod book;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod search;
pub mod source;

pub use book::{Book, ListPrice};
pub use cache::BookCache;
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use filter::PriceRange;
pub use search::{SearchDefaults, SearchKey};
pub use source::BookSource;
