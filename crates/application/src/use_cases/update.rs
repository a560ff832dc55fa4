use catalog_products::{
    DiscountPercentage, Money, Product, ProductError, ProductId, ProductRepository, ProductTitle,
    Stock,
};

use crate::error::CatalogResult;
use crate::form::ProductUpdate;

/// Apply a partial update (PATCH semantics) to an existing product.
pub struct UpdateProductUseCase<R> {
    repository: R,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fields left `None` in `updates` are untouched. Every present field goes
    /// through the matching aggregate method, so the aggregate re-checks its
    /// invariants; the first failure aborts before `save`.
    pub async fn execute(&self, id: i64, updates: &ProductUpdate) -> CatalogResult<Product> {
        let product_id = ProductId::create(id)?;
        tracing::debug!(product_id = %product_id, fields = ?updates.fields(), "updating product");

        let Some(mut product) = self.repository.find_by_id(&product_id).await? else {
            tracing::warn!(product_id = %product_id, "product not found");
            return Err(ProductError::not_found(product_id).into());
        };

        if let Some(title) = &updates.title {
            product.update_title(ProductTitle::create(title)?);
        }
        if let Some(description) = &updates.description {
            product.update_description(description.as_str())?;
        }
        if let Some(price) = updates.price {
            product.update_price(Money::create(price)?);
        }
        if let Some(discount) = updates.discount_percentage {
            product.apply_discount(DiscountPercentage::create(discount)?);
        }
        if let Some(stock) = updates.stock {
            product.update_stock(Stock::create(stock)?);
        }
        if let Some(category) = &updates.category {
            product.update_category(category.as_str())?;
        }

        let saved = self.repository.save(product).await?;
        tracing::info!(product_id = %product_id, "product updated");
        Ok(saved)
    }
}
