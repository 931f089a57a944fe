//! Book catalog (Google Books volumes) client.
//!
//! ### Protocol
//!
//! - **Endpoint**: `https://www.googleapis.com/books/v1/volumes`
//! - **Parameters**: `q`, `maxResults`, optional `key`.
//! - **Errors**: timeouts, transport failures, non-2xx statuses and
//!   undecodable payloads are reported as distinct [`CatalogError`] kinds.
//! - **Normalization**: items become [`Book`] records in catalog order.

pub mod error;
pub mod request;
pub mod response;

pub use error::CatalogError;
pub use request::SearchRequest;
pub use response::VolumesResponse;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bookshelf_core::{AppConfig, Book, BookSource, Error, SearchKey};
use reqwest::{Url, header};

/// Default catalog endpoint.
const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "bookshelf/0.1";

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Volumes endpoint.
    pub url: String,
    /// Optional API key.
    pub api_key: Option<String>,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: bookshelf/0.x).
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&AppConfig> for CatalogConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            url: config.catalog_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Book catalog client.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: Url,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new catalog client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let url = Url::parse(&config.url).map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .build()
            .map_err(|e| CatalogError::Network(Arc::new(e)))?;

        Ok(Self { http, url, config })
    }

    /// Run one search against the catalog.
    pub async fn search(&self, req: &SearchRequest) -> Result<Vec<Book>, CatalogError> {
        let start = Instant::now();

        tracing::debug!(query = %req.q, max_results = req.max_results, "searching catalog");

        let http_response = self
            .http
            .get(self.url.clone())
            .header(header::ACCEPT, "application/json")
            .query(req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("catalog response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let response: VolumesResponse =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let books = response.into_books();
        tracing::debug!("catalog search completed in {:?}, {} results", start.elapsed(), books.len());

        Ok(books)
    }
}

#[async_trait]
impl BookSource for CatalogClient {
    async fn search(&self, key: &SearchKey) -> Result<Vec<Book>, Error> {
        let req = SearchRequest::for_key(key, self.config.api_key.as_deref());
        CatalogClient::search(self, &req).await.map_err(Error::from)
    }
}
