use crate::domain::{Product, UpstreamError};
use crate::interface_adapters::protocol::PRODUCTS_ERROR;
use crate::interface_adapters::state::AppState;
use crate::use_cases::ListProductsUseCase;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

#[tracing::instrument(name = "list_products", skip_all)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, (StatusCode, &'static str)> {
    let use_case = ListProductsUseCase {
        catalog: state.catalog.as_ref(),
    };

    let products = use_case.execute().await.map_err(map_catalog_error)?;

    Ok(Json(products))
}

// Upstream failures are not distinguished by cause.
fn map_catalog_error(_err: UpstreamError) -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, PRODUCTS_ERROR)
}
