//! Product domain errors.

use catalog_core::{DomainError, DomainErrorKind};
use thiserror::Error;

/// Result type used across the products domain.
pub type ProductResult<T> = Result<T, ProductError>;

/// Every failure the products domain can report.
///
/// Each variant carries the human-readable message produced at the point of
/// violation; the message includes the offending value where there is one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("{0}")]
    InvalidProductId(String),

    #[error("{0}")]
    InvalidMoney(String),

    #[error("{0}")]
    InvalidDiscountPercentage(String),

    #[error("{0}")]
    InvalidProductTitle(String),

    #[error("{0}")]
    InvalidStock(String),

    /// Description, category or rating rejected by the `Product` aggregate.
    #[error("{0}")]
    InvalidProduct(String),

    #[error("{0}")]
    ProductNotFound(String),

    #[error("{0}")]
    DuplicateProductTitle(String),
}

impl ProductError {
    pub fn not_found(id: impl core::fmt::Display) -> Self {
        Self::ProductNotFound(format!("Product with ID {id} not found"))
    }

    pub fn duplicate_title(title: impl core::fmt::Display) -> Self {
        Self::DuplicateProductTitle(format!("Product with title \"{title}\" already exists"))
    }

    pub fn message(&self) -> &str {
        match self {
            ProductError::InvalidProductId(msg)
            | ProductError::InvalidMoney(msg)
            | ProductError::InvalidDiscountPercentage(msg)
            | ProductError::InvalidProductTitle(msg)
            | ProductError::InvalidStock(msg)
            | ProductError::InvalidProduct(msg)
            | ProductError::ProductNotFound(msg)
            | ProductError::DuplicateProductTitle(msg) => msg,
        }
    }
}

impl DomainError for ProductError {
    fn kind(&self) -> DomainErrorKind {
        match self {
            ProductError::InvalidProductId(_) => DomainErrorKind::InvalidId,
            ProductError::InvalidMoney(_)
            | ProductError::InvalidDiscountPercentage(_)
            | ProductError::InvalidProductTitle(_)
            | ProductError::InvalidStock(_) => DomainErrorKind::Validation,
            ProductError::InvalidProduct(_) => DomainErrorKind::InvariantViolation,
            ProductError::ProductNotFound(_) => DomainErrorKind::NotFound,
            ProductError::DuplicateProductTitle(_) => DomainErrorKind::Conflict,
        }
    }

    fn message(&self) -> &str {
        ProductError::message(self)
    }
}
