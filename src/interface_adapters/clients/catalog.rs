use crate::domain::{CatalogProvider, Product, UpstreamError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

// Shape of the catalog reply; everything except `products` is ignored.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Option<Vec<Product>>,
}

// Thin wrapper around reqwest for catalog calls.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    pub products_url: String,
}

impl CatalogClient {
    pub fn new(http: Client, products_url: impl Into<String>) -> Self {
        Self {
            http,
            products_url: products_url.into(),
        }
    }
}

#[async_trait]
impl CatalogProvider for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, UpstreamError> {
        let res = self
            .http
            .get(&self.products_url)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;
        let status = res.status();

        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let envelope = res
            .json::<ProductsEnvelope>()
            .await
            .map_err(|err| UpstreamError::Decode(err.to_string()))?;

        envelope.products.ok_or(UpstreamError::MissingProducts)
    }
}
