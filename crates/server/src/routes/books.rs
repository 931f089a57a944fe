//! Book listing, search and refresh endpoints.
//!
//! None of these handlers fail on bad input or an unreachable catalog:
//! unparseable numbers fall back to defaults and catalog failures are served
//! as an empty list by the cache.

use axum::{
    Json,
    extract::{Query, State},
};
use bookshelf_core::{Book, PriceRange};
use serde::{Deserialize, Serialize};

use crate::handler::AppState;

/// Raw query parameters for `/api/books/search`.
///
/// Kept as strings so a garbled number never rejects the request.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub max_results: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl SearchParams {
    /// Collect the known parameters from decoded query pairs.
    ///
    /// A repeated name keeps its first value; unknown names are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (name, value) in pairs {
            let field = match name.as_str() {
                "q" => &mut params.q,
                "max_results" => &mut params.max_results,
                "min_price" => &mut params.min_price,
                "max_price" => &mut params.max_price,
                _ => continue,
            };
            field.get_or_insert(value);
        }
        params
    }
}

/// Body returned by `/api/books/refresh`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub status: String,
    pub count: usize,
}

/// `GET /api/books`: the default query's results.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let books = state.cache.lookup_or_empty(state.defaults.key()).await;
    Json(books.to_vec())
}

/// `GET /api/books/search`: a query with an optional price range.
pub async fn search_books(
    State(state): State<AppState>, Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Book>> {
    let params = SearchParams::from_pairs(pairs);
    let key = state
        .defaults
        .resolve(params.q.as_deref(), params.max_results.as_deref());
    let range = PriceRange::parse(params.min_price.as_deref(), params.max_price.as_deref());

    tracing::debug!(query = %key.query, max_results = key.max_results, ?range, "search request");

    let books = state.cache.lookup_or_empty(key).await;
    if range.is_unbounded() {
        return Json(books.to_vec());
    }

    Json(range.apply(&books))
}

/// `POST /api/books/refresh`: drop the cached result and refetch the default query.
pub async fn refresh_books(State(state): State<AppState>) -> Json<RefreshResponse> {
    state.cache.invalidate().await;
    let books = state.cache.lookup_or_empty(state.defaults.key()).await;

    tracing::info!(count = books.len(), "refreshed default book list");

    Json(RefreshResponse { status: "refreshed".to_string(), count: books.len() })
}
