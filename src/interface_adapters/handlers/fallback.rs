use crate::interface_adapters::protocol::{GREETING, NOT_FOUND};
use axum::http::StatusCode;

// Root greeting, only reached when no static index page shadows it.
pub async fn hello() -> &'static str {
    GREETING
}

// Catch-all for unknown paths and unsupported methods.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND)
}
