//! Application layer: use cases orchestrating the products domain against the
//! [`ProductRepository`](catalog_products::ProductRepository) port.
//!
//! Each use case is a single linear flow: build value objects from raw input,
//! run domain validation, call the repository, return. Nothing here performs IO
//! itself or keeps state between calls.

pub mod error;
pub mod form;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{CatalogError, CatalogResult};
pub use form::{FormErrors, ProductFormData, ProductUpdate, sanitize_string};
pub use use_cases::{
    CreateProductUseCase, DeleteProductUseCase, DuplicateCheck, GetProductUseCase,
    GetProductsUseCase, PLACEHOLDER_IMAGE, ProductListing, ProductQuery, UpdateProductUseCase,
};
