//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Persistence is
//! reached only through the [`ProductRepository`] port.

pub mod domain_service;
pub mod dto;
pub mod error;
pub mod product;
pub mod repository;
pub mod value_objects;

pub use domain_service::ProductDomainService;
pub use dto::ProductDto;
pub use error::{ProductError, ProductResult};
pub use product::{NewProduct, Product, ProductMeta};
pub use repository::{ProductPage, ProductRepository, RepositoryError};
pub use value_objects::{DiscountPercentage, Money, ProductId, ProductTitle, Stock};
