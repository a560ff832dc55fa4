use catalog_core::ValueObject;

use crate::error::{ProductError, ProductResult};

/// Units in stock: an integer in `0..=999_999`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stock(u32);

impl Stock {
    pub const MAX: u32 = 999_999;

    /// Takes a raw number as it arrives from forms or JSON; the integer check
    /// runs before the range checks.
    pub fn create(value: f64) -> ProductResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ProductError::InvalidStock(format!(
                "Stock must be an integer, got: {value}"
            )));
        }
        if value < 0.0 {
            return Err(ProductError::InvalidStock(format!(
                "Stock cannot be negative, got: {value}"
            )));
        }
        if value > f64::from(Self::MAX) {
            return Err(ProductError::InvalidStock(format!(
                "Stock cannot exceed {}, got: {value}",
                Self::MAX
            )));
        }

        Ok(Self(value as u32))
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Stock {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Stock::create(0.0).unwrap().value(), 0);
        assert_eq!(Stock::create(999_999.0).unwrap().value(), 999_999);
        assert!(Stock::zero().is_out_of_stock());
    }

    #[test]
    fn rejects_decimals_even_in_range() {
        let err = Stock::create(99.99).unwrap_err();
        assert!(err.message().starts_with("Stock must be an integer"), "{err}");
    }

    #[test]
    fn integer_check_runs_before_range_checks() {
        let err = Stock::create(-1.5).unwrap_err();
        assert!(err.message().starts_with("Stock must be an integer"), "{err}");

        let err = Stock::create(f64::NAN).unwrap_err();
        assert!(err.message().starts_with("Stock must be an integer"), "{err}");
    }

    #[test]
    fn rejects_out_of_range() {
        let err = Stock::create(-1.0).unwrap_err();
        assert!(err.message().starts_with("Stock cannot be negative"), "{err}");

        let err = Stock::create(1_000_000.0).unwrap_err();
        assert!(err.message().starts_with("Stock cannot exceed 999999"), "{err}");
    }

    proptest! {
        #[test]
        fn integers_in_range_are_accepted(value in 0u32..=Stock::MAX) {
            prop_assert_eq!(Stock::create(f64::from(value)).unwrap().value(), value);
        }

        #[test]
        fn fractional_values_are_rejected(whole in 0u32..Stock::MAX, frac in 0.01f64..0.99) {
            let raw = f64::from(whole) + frac;
            prop_assert!(matches!(Stock::create(raw), Err(ProductError::InvalidStock(_))));
        }
    }
}
