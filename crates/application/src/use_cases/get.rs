use catalog_products::{Product, ProductError, ProductId, ProductRepository};

use crate::error::CatalogResult;

/// Fetch a single product by id.
pub struct GetProductUseCase<R> {
    repository: R,
}

impl<R> GetProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i64) -> CatalogResult<Product> {
        let product_id = ProductId::create(id)?;
        tracing::debug!(product_id = %product_id, "fetching product");

        match self.repository.find_by_id(&product_id).await? {
            Some(product) => Ok(product),
            None => {
                tracing::warn!(product_id = %product_id, "product not found");
                Err(ProductError::not_found(product_id).into())
            }
        }
    }
}
