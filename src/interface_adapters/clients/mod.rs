// The clients defined here are for reqwest clients to communicate with external services.
pub mod auth;
pub mod catalog;

pub use auth::AuthClient;
pub use catalog::CatalogClient;

use std::time::Duration;

// Both upstream adapters share one connection pool.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
