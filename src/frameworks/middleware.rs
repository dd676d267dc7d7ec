// Request-processing stages applied before route dispatch.
//
// Outermost first: request id, trace span, preflight status, CORS, panic
// catcher, static files, then the API router (which owns JSON parsing and the 404 fallback).

use crate::interface_adapters::protocol::INTERNAL_ERROR;
use crate::interface_adapters::request_id::{REQUEST_ID_HEADER, request_id_middleware};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::ACCESS_CONTROL_REQUEST_METHOD},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use std::{any::Any, path::Path};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::Span;

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

// Wrap the API router with every stage.
pub fn gateway(api: Router, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .fallback_service(static_assets(static_dir, api))
        .layer(catch_panic_layer())
        .layer(cors_layer())
        .layer(middleware::from_fn(preflight_no_content))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(middleware::from_fn(request_id_middleware))
}

// Existing files win; anything else (including non-GET methods) reaches `api`.
pub fn static_assets(static_dir: impl AsRef<Path>, api: Router) -> ServeDir<Router> {
    ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(api)
}

// Cross-origin requests are always allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

// CorsLayer answers preflights with 200; browsers and cors() clients expect 204.
pub async fn preflight_no_content(request: Request<Body>, next: Next) -> Response {
    let is_preflight = request.method() == Method::OPTIONS
        && request.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD);

    let mut response = next.run(request).await;
    if is_preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "internal server error");

    // The panic detail is logged only, never returned.
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
}

fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
