use crate::interface_adapters::handlers::{cart, hello, list_products, login, not_found};
use crate::interface_adapters::protocol::JSON_BODY_LIMIT;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/", get(hello))
        .route("/products", get(list_products))
        .route("/login", post(login))
        .route("/cart", post(cart))
        // A known path with the wrong method is still just "not found".
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .with_state(state)
}
