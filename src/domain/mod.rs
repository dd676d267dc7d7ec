mod catalog;
mod errors;
mod login;
mod ports;

// Re-export the domain boundary types and ports.
pub use catalog::{CartContent, Product};
pub use errors::{LoginError, UpstreamError};
pub use login::{AuthReply, Credentials};
pub use ports::{AuthProvider, CatalogProvider};
