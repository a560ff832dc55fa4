//! Persistence port for `Product` aggregates.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::ProductError;
use crate::product::Product;
use crate::value_objects::ProductId;

/// One page of products plus the number of matches across all pages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, total: u64) -> Self {
        Self { products, total }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Repository operation error.
///
/// These are **infrastructure errors** (storage, transport, mapping) as opposed
/// to domain errors (validation, invariants).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// The backing store refused the operation.
    #[error("repository rejected operation: {0}")]
    Rejected(String),

    /// Stored data could not be turned back into a valid `Product`.
    #[error("stored product is invalid: {0}")]
    Mapping(#[from] ProductError),
}

/// Async persistence port for products, keyed by [`ProductId`].
///
/// Contract:
/// - `find_by_id` returns `Ok(None)` when the product is absent.
/// - read operations return an empty page with `total == 0` when nothing
///   matches, never an error.
/// - `save` is an upsert keyed by id. A remote adapter may use
///   [`ProductId::is_client_generated`] to pick create or update; a local
///   store simply replaces any existing entry.
/// - write failures are returned to the caller, never swallowed.
/// - `exists_by_title` compares titles case-insensitively and exactly.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;

    async fn find_all(&self, limit: u32, skip: u32) -> Result<ProductPage, RepositoryError>;

    async fn find_by_category(
        &self,
        category: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError>;

    async fn search(
        &self,
        query: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError>;

    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;

    async fn exists(&self, id: &ProductId) -> Result<bool, RepositoryError>;

    async fn exists_by_title(&self, title: &str) -> Result<bool, RepositoryError>;
}

#[async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self, limit: u32, skip: u32) -> Result<ProductPage, RepositoryError> {
        (**self).find_all(limit, skip).await
    }

    async fn find_by_category(
        &self,
        category: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError> {
        (**self).find_by_category(category, limit, skip).await
    }

    async fn search(
        &self,
        query: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError> {
        (**self).search(query, limit, skip).await
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        (**self).save(product).await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        (**self).delete(id).await
    }

    async fn exists(&self, id: &ProductId) -> Result<bool, RepositoryError> {
        (**self).exists(id).await
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, RepositoryError> {
        (**self).exists_by_title(title).await
    }
}
