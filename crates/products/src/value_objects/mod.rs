//! Self-validating value objects composed by the `Product` aggregate.

mod discount;
mod money;
mod product_id;
mod stock;
mod title;

pub use discount::DiscountPercentage;
pub use money::Money;
pub use product_id::ProductId;
pub use stock::Stock;
pub use title::ProductTitle;
