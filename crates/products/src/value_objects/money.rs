use catalog_core::ValueObject;

use crate::error::{ProductError, ProductResult};

/// Non-negative, finite monetary amount in a currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    amount: f64,
    currency: String,
}

impl Money {
    pub const DEFAULT_CURRENCY: &'static str = "USD";

    /// Amount in [`Money::DEFAULT_CURRENCY`].
    pub fn create(amount: f64) -> ProductResult<Self> {
        Self::create_in(amount, Self::DEFAULT_CURRENCY)
    }

    pub fn create_in(amount: f64, currency: impl Into<String>) -> ProductResult<Self> {
        // Negative is reported first, so -inf is "negative" rather than "not finite".
        if amount < 0.0 {
            return Err(ProductError::InvalidMoney(format!(
                "Money amount cannot be negative, got: {amount}"
            )));
        }
        if !amount.is_finite() {
            return Err(ProductError::InvalidMoney(format!(
                "Money amount must be finite, got: {amount}"
            )));
        }

        Ok(Self {
            amount,
            currency: currency.into(),
        })
    }

    pub fn zero(currency: impl Into<String>) -> Self {
        Self {
            amount: 0.0,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}
