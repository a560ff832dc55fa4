//! Application use cases.
//!
//! Each use case takes its repository through the constructor; there is no
//! process-wide registry. Wiring lives with the caller (see the infra crate's
//! container).

mod create;
mod delete;
mod get;
mod get_many;
mod update;

pub use create::{CreateProductUseCase, DuplicateCheck, PLACEHOLDER_IMAGE};
pub use delete::DeleteProductUseCase;
pub use get::GetProductUseCase;
pub use get_many::{GetProductsUseCase, ProductListing, ProductQuery};
pub use update::UpdateProductUseCase;
