use catalog_core::{ClientIdRange, ValueObject};
use serde::{Deserialize, Serialize};

use crate::error::{ProductError, ProductResult};

/// Positive product identifier.
///
/// Server-assigned ids come from `create`; ids minted locally for products not
/// yet persisted come from `create_client_id` and fall in
/// [`ClientIdRange::DEFAULT`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn create(value: i64) -> ProductResult<Self> {
        if value <= 0 {
            return Err(ProductError::InvalidProductId(format!(
                "Product ID must be positive, got: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn create_client_id(value: i64) -> ProductResult<Self> {
        let range = ClientIdRange::DEFAULT;
        if !range.contains(value) {
            return Err(ProductError::InvalidProductId(format!(
                "Client ID must be in range [{}, {}], got: {value}",
                range.min, range.max
            )));
        }
        Self::create(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_client_generated(&self) -> bool {
        ClientIdRange::DEFAULT.contains(self.0)
    }
}

impl ValueObject for ProductId {}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
