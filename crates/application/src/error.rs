//! Use-case error model.

use catalog_core::{DomainError, DomainErrorKind};
use catalog_products::{ProductError, RepositoryError};
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a use case.
///
/// Domain errors and repository errors both pass through untouched; the only
/// translation a use case performs is turning a repository "absent" answer
/// into [`ProductError::ProductNotFound`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] ProductError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    /// Domain classification, `None` for repository failures.
    pub fn kind(&self) -> Option<DomainErrorKind> {
        match self {
            CatalogError::Domain(e) => Some(e.kind()),
            CatalogError::Repository(_) => None,
        }
    }

    pub fn as_domain(&self) -> Option<&ProductError> {
        match self {
            CatalogError::Domain(e) => Some(e),
            CatalogError::Repository(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Domain(ProductError::ProductNotFound(_)))
    }

    pub fn is_duplicate_title(&self) -> bool {
        matches!(self, CatalogError::Domain(ProductError::DuplicateProductTitle(_)))
    }
}
