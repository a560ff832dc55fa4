//! Client-minted identifiers.
//!
//! Entities created locally get an identifier before the backend assigns a
//! permanent one. Those identifiers live in a reserved numeric range so that
//! repositories can tell "not yet persisted" apart from server-assigned ids.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive range reserved for client-generated identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientIdRange {
    pub min: i64,
    pub max: i64,
}

impl ClientIdRange {
    /// Server ids are expected to stay well below `min`.
    pub const DEFAULT: ClientIdRange = ClientIdRange {
        min: 10_000,
        max: 99_999,
    };

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of ids in the range (0 for an inverted range).
    pub fn size(&self) -> u64 {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as u64 + 1
        }
    }
}

impl Default for ClientIdRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Generate a random identifier inside `range`.
///
/// Takes the first 32 bits of a random UUIDv4 and maps them into the range.
/// Returns `range.min` for an empty range.
pub fn generate_client_id(range: ClientIdRange) -> i64 {
    let size = range.size();
    if size == 0 {
        return range.min;
    }

    let bytes = Uuid::new_v4().into_bytes();
    let prefix = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64;
    range.min + (prefix % size) as i64
}
