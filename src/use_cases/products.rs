use crate::domain::{CatalogProvider, Product, UpstreamError};

// Lists the catalog by delegating to the upstream provider.
pub struct ListProductsUseCase<'a, C: ?Sized> {
    pub catalog: &'a C,
}

impl<C> ListProductsUseCase<'_, C>
where
    C: CatalogProvider + ?Sized,
{
    pub async fn execute(&self) -> Result<Vec<Product>, UpstreamError> {
        let products = self.catalog.fetch_products().await.inspect_err(|err| {
            tracing::error!(error = %err, "error fetching products");
        })?;

        tracing::debug!(count = products.len(), "products fetched");
        Ok(products)
    }
}
