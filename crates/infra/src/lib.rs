//! Infrastructure layer: storage adapters, API wire types, configuration and
//! the dependency container.

pub mod api;
pub mod config;
pub mod container;
pub mod mapper;
pub mod repository;

pub use api::{ApiProduct, Dimensions, ProductsResponse, Review};
pub use config::CatalogConfig;
pub use container::{Container, SharedRepository};
pub use mapper::ProductMapper;
pub use repository::InMemoryProductRepository;
