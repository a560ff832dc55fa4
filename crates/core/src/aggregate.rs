//! Aggregate root trait for catalog domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// The aggregate root is the only entry point for mutating the objects it
/// composes. Mutation methods on implementors must re-check every invariant they
/// touch and leave the aggregate unchanged when a check fails.
///
/// Aggregates must not perform IO. Loading and persisting them is the job of a
/// repository port owned by the domain module.
pub trait AggregateRoot: Entity {
    /// Stable, human-readable aggregate type name (used in logs).
    fn aggregate_type() -> &'static str;
}
