use catalog_core::ValueObject;

use crate::error::{ProductError, ProductResult};

/// Discount percentage in `[0, 100]` (inclusive, decimals allowed).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiscountPercentage(f64);

impl DiscountPercentage {
    pub fn create(value: f64) -> ProductResult<Self> {
        // NaN fails the range check.
        if !(0.0..=100.0).contains(&value) {
            return Err(ProductError::InvalidDiscountPercentage(format!(
                "Discount must be between 0 and 100, got: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn none() -> Self {
        Self(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Price after applying this discount.
    pub fn apply_to(&self, amount: f64) -> f64 {
        amount * (100.0 - self.0) / 100.0
    }
}

impl Default for DiscountPercentage {
    fn default() -> Self {
        Self::none()
    }
}

impl ValueObject for DiscountPercentage {}
