//! Errors produced by [`FloatMap`](crate::FloatMap) operations

use thiserror::Error;

use crate::neighbor::Relation;

/// Errors from looking up, inserting into, or querying a [`FloatMap`](crate::FloatMap)
///
/// A failing operation never modifies the map.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum FloatMapError {
    /// The exact key is not stored in the map
    #[error("key not found: {0:?}")]
    KeyNotFound(f64),
    /// No stored key satisfies the requested relation to the query key
    #[error("no entry with a key {relation} {key:?}")]
    NoSuchNeighbor {
        /// The relation the stored key was required to satisfy
        relation: Relation,
        /// The query key
        key: f64,
    },
    /// NaN has no position in the key order, so it cannot be stored
    #[error("NaN cannot be used as a key")]
    NanKey,
    /// The key could not be converted to an `f64`
    #[error("key is not representable as an f64")]
    UnrepresentableKey,
}

/// Result type defaulting to [`FloatMapError`]
pub type Result<T, E = FloatMapError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_key() {
        assert_eq!(
            FloatMapError::KeyNotFound(2.5).to_string(),
            "key not found: 2.5"
        );
        assert_eq!(
            FloatMapError::NoSuchNeighbor {
                relation: Relation::Lt,
                key: 1.0,
            }
            .to_string(),
            "no entry with a key < 1.0"
        );
    }
}
