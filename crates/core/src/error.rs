//! Domain error model.

/// Coarse classification shared by every domain error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    /// A value failed validation (e.g. malformed input).
    Validation,
    /// A domain invariant was violated.
    InvariantViolation,
    /// An identifier was invalid.
    InvalidId,
    /// A requested resource was not found (domain-level).
    NotFound,
    /// A conflict with existing state (e.g. a uniqueness rule).
    Conflict,
}

impl DomainErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainErrorKind::Validation => "validation",
            DomainErrorKind::InvariantViolation => "invariant_violation",
            DomainErrorKind::InvalidId => "invalid_id",
            DomainErrorKind::NotFound => "not_found",
            DomainErrorKind::Conflict => "conflict",
        }
    }
}

impl core::fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common interface of domain-level errors.
///
/// Every domain error carries a human-readable message and can be classified
/// without matching on the concrete module error type.
pub trait DomainError: std::error::Error {
    fn kind(&self) -> DomainErrorKind;

    fn message(&self) -> &str;

    fn is_not_found(&self) -> bool {
        self.kind() == DomainErrorKind::NotFound
    }
}
