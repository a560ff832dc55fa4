//! Rules spanning several `Product` aggregates.

use crate::error::{ProductError, ProductResult};
use crate::product::Product;

/// Stateless cross-aggregate checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductDomainService;

impl ProductDomainService {
    pub fn new() -> Self {
        Self
    }

    /// Reject `candidate` when any product in `existing` has the same title,
    /// compared case-insensitively.
    ///
    /// Sourcing `existing` is the caller's job; this performs no IO.
    pub fn validate_product_creation(
        &self,
        candidate: &Product,
        existing: &[Product],
    ) -> ProductResult<()> {
        let title = candidate.title();
        if existing
            .iter()
            .any(|p| title.matches_ignore_case(p.title().value()))
        {
            return Err(ProductError::duplicate_title(title));
        }
        Ok(())
    }
}
