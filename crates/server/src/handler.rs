//! HTTP application wiring.
//!
//! Builds the shared state and the axum router that maps each route to its
//! handler in [`crate::routes`].

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use bookshelf_core::{BookCache, BookSource, SearchDefaults};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{books, page};

/// State shared by every handler.
///
/// The cache is created once at startup and lives as long as the router.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<BookCache>,
    pub defaults: Arc<SearchDefaults>,
}

impl AppState {
    pub fn new(source: Arc<dyn BookSource>, defaults: SearchDefaults) -> Self {
        Self { cache: Arc::new(BookCache::new(source)), defaults: Arc::new(defaults) }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/books", get(books::list_books))
        .route("/api/books/search", get(books::search_books))
        .route("/api/books/refresh", post(books::refresh_books))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
