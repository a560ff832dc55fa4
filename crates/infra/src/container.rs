//! Composition root: one shared repository, use cases handed out on demand.

use std::sync::Arc;

use catalog_application::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, GetProductsUseCase,
    UpdateProductUseCase,
};
use catalog_core::{ClientIdRange, generate_client_id};
use catalog_products::ProductRepository;

use crate::config::CatalogConfig;
use crate::repository::InMemoryProductRepository;

pub type SharedRepository = Arc<dyn ProductRepository>;

/// Holds the repository every use case is wired against.
///
/// Swap the implementation by constructing with [`Container::new`]; tests and
/// local runs use [`Container::in_memory`].
#[derive(Clone)]
pub struct Container {
    repository: SharedRepository,
    config: CatalogConfig,
}

impl Container {
    pub fn new(repository: SharedRepository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    pub fn in_memory(config: CatalogConfig) -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()), config)
    }

    pub fn repository(&self) -> SharedRepository {
        Arc::clone(&self.repository)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fresh id in the client range for [`CreateProductUseCase::execute`].
    pub fn next_client_id(&self) -> i64 {
        generate_client_id(ClientIdRange::DEFAULT)
    }

    pub fn create_product(&self) -> CreateProductUseCase<SharedRepository> {
        CreateProductUseCase::new(self.repository())
            .with_duplicate_check(self.config.duplicate_check)
    }

    pub fn update_product(&self) -> UpdateProductUseCase<SharedRepository> {
        UpdateProductUseCase::new(self.repository())
    }

    pub fn get_product(&self) -> GetProductUseCase<SharedRepository> {
        GetProductUseCase::new(self.repository())
    }

    pub fn get_products(&self) -> GetProductsUseCase<SharedRepository> {
        GetProductsUseCase::new(self.repository())
            .with_page_limits(self.config.default_page_size, self.config.max_page_size)
    }

    pub fn delete_product(&self) -> DeleteProductUseCase<SharedRepository> {
        DeleteProductUseCase::new(self.repository())
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_cases_share_one_repository() {
        let container = Container::in_memory(CatalogConfig::default());
        let a = container.repository();
        let b = container.clone().repository();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn client_ids_fall_in_range() {
        let container = Container::in_memory(CatalogConfig::default());
        for _ in 0..100 {
            assert!(ClientIdRange::DEFAULT.contains(container.next_client_id()));
        }
    }
}
