use async_trait::async_trait;

use crate::domain::{AuthReply, Credentials, Product, UpstreamError};

// The handlers depend on these traits, not the concrete reqwest clients.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, UpstreamError>;
}

// Any HTTP reply from the auth service is `Ok`; only transport problems are errors.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthReply, UpstreamError>;
}
