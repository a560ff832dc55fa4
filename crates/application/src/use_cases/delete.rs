use catalog_products::{ProductError, ProductId, ProductRepository};

use crate::error::CatalogResult;

/// Delete a product by id.
pub struct DeleteProductUseCase<R> {
    repository: R,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i64) -> CatalogResult<()> {
        let product_id = ProductId::create(id)?;
        tracing::debug!(product_id = %product_id, "deleting product");

        if !self.repository.exists(&product_id).await? {
            tracing::warn!(product_id = %product_id, "product not found");
            return Err(ProductError::not_found(product_id).into());
        }

        self.repository.delete(&product_id).await?;
        tracing::info!(product_id = %product_id, "product deleted");
        Ok(())
    }
}
