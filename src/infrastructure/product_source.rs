//! Live product source backed by the storefront HTTP API

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::{
    domain::{
        product::{Product, ProductsResponse},
        query::FetchRequest,
    },
    infrastructure::cache::CacheError,
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Offline cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Anything that can serve one page of products
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self, request: &FetchRequest) -> Result<Vec<Product>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpProductSource {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpProductSource {
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(parse_base_url(base_url.as_ref())?, http))
    }

    pub fn with_client(base_url: Url, http: reqwest::Client) -> Self {
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/products` with the request's non-empty parameters
    pub fn products_url(&self, request: &FetchRequest) -> Result<Url, FetchError> {
        let mut url = self.base_url.join("products")?;
        url.query_pairs_mut()
            .extend_pairs(request.query_pairs().iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self, request: &FetchRequest) -> Result<Vec<Product>, FetchError> {
        let url = self.products_url(request)?;
        log::debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let products = serde_json::from_str::<ProductsResponse>(&body)?.into_products();
        log::debug!("Received {} products for page {}", products.len(), request.page);
        Ok(products)
    }
}

/// Parses an API base URL so that relative joins land under it
/// (`http://host/api` and `http://host/api/` both resolve `products` to `/api/products`).
pub fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}
