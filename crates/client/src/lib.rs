//! Client code for bookshelf.
//!
//! This crate provides the HTTP client for the book catalog and its
//! implementation of the core `BookSource` seam.

pub mod catalog;

pub use catalog::{CatalogClient, CatalogConfig, CatalogError, SearchRequest, VolumesResponse};
