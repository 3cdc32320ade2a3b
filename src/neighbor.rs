//! Directional neighbor queries: the nearest stored entry below or above a query key.
//!
//! `find_lt`/`find_gt` exclude an exact match of the query key, `find_le`/`find_ge` include it.

use core::fmt::{self, Display, Formatter};

use crate::error::{FloatMapError, Result};
use crate::key;
use crate::map::FloatMap;

/// How a stored key must relate to the query key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Strictly less than
    Lt,
    /// Less than or equal to
    Le,
    /// Strictly greater than
    Gt,
    /// Greater than or equal to
    Ge,
}

impl Relation {
    /// Returns `true` if `stored` relates to `query` in this way. Nothing relates to NaN
    pub fn holds(self, stored: f64, query: f64) -> bool {
        match self {
            Self::Lt => stored < query,
            Self::Le => stored <= query,
            Self::Gt => stored > query,
            Self::Ge => stored >= query,
        }
    }
}

impl Display for Relation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match *self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        })
    }
}

impl<V> FloatMap<V> {
    /// The entry with the largest key strictly less than `key`
    pub fn find_lt(&self, key: f64) -> Result<(f64, &V)> {
        self.find(key, Relation::Lt)
    }

    /// The entry with the largest key less than or equal to `key`
    pub fn find_le(&self, key: f64) -> Result<(f64, &V)> {
        self.find(key, Relation::Le)
    }

    /// The entry with the smallest key strictly greater than `key`
    pub fn find_gt(&self, key: f64) -> Result<(f64, &V)> {
        self.find(key, Relation::Gt)
    }

    /// The entry with the smallest key greater than or equal to `key`
    pub fn find_ge(&self, key: f64) -> Result<(f64, &V)> {
        self.find(key, Relation::Ge)
    }

    /// The entry nearest to `key` among those whose keys satisfy `relation`.
    ///
    /// Fails with [`FloatMapError::NoSuchNeighbor`] if no stored key satisfies it, which is always the case for an
    /// empty map or a NaN `key`.
    pub fn find(&self, key: f64, relation: Relation) -> Result<(f64, &V)> {
        let index = if key.is_nan() {
            None
        } else {
            match relation {
                Relation::Lt => key::lower_bound(&self.keys, key).checked_sub(1),
                Relation::Le => key::upper_bound(&self.keys, key).checked_sub(1),
                Relation::Gt => Some(key::upper_bound(&self.keys, key)),
                Relation::Ge => Some(key::lower_bound(&self.keys, key)),
            }
        };

        index
            .and_then(|index| Some((*self.keys.get(index)?, self.values.get(index)?)))
            .ok_or(FloatMapError::NoSuchNeighbor { relation, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> FloatMap<&'static str> {
        FloatMap::try_from_pairs([(1.0, "a"), (2.0, "b"), (3.0, "c")]).unwrap()
    }

    fn missing(relation: Relation, key: f64) -> Result<(f64, &'static &'static str)> {
        Err(FloatMapError::NoSuchNeighbor { relation, key })
    }

    #[test]
    fn exact_match_ties() {
        let map = abc();
        assert_eq!(map.find_lt(2.0), Ok((1.0, &"a")));
        assert_eq!(map.find_le(2.0), Ok((2.0, &"b")));
        assert_eq!(map.find_gt(2.0), Ok((3.0, &"c")));
        assert_eq!(map.find_ge(2.0), Ok((2.0, &"b")));
    }

    #[test]
    fn between_keys() {
        let map = abc();
        assert_eq!(map.find_lt(2.5), Ok((2.0, &"b")));
        assert_eq!(map.find_le(2.5), Ok((2.0, &"b")));
        assert_eq!(map.find_gt(2.5), Ok((3.0, &"c")));
        assert_eq!(map.find_ge(2.5), Ok((3.0, &"c")));
    }

    #[test]
    fn past_the_ends() {
        let map = abc();
        assert_eq!(map.find_lt(1.0), missing(Relation::Lt, 1.0));
        assert_eq!(map.find_le(0.5), missing(Relation::Le, 0.5));
        assert_eq!(map.find_le(1.0), Ok((1.0, &"a")));
        assert_eq!(map.find_gt(3.0), missing(Relation::Gt, 3.0));
        assert_eq!(map.find_ge(3.5), missing(Relation::Ge, 3.5));
        assert_eq!(map.find_ge(3.0), Ok((3.0, &"c")));
        assert_eq!(map.find_lt(f64::INFINITY), Ok((3.0, &"c")));
        assert_eq!(map.find_gt(f64::NEG_INFINITY), Ok((1.0, &"a")));
    }

    #[test]
    fn empty_map_has_no_neighbors() {
        let map = FloatMap::<&'static str>::new();
        for relation in [Relation::Lt, Relation::Le, Relation::Gt, Relation::Ge] {
            assert_eq!(map.find(0.0, relation), missing(relation, 0.0));
        }
    }

    #[test]
    fn nan_has_no_neighbors() {
        let map = abc();
        for relation in [Relation::Lt, Relation::Le, Relation::Gt, Relation::Ge] {
            assert!(matches!(
                map.find(f64::NAN, relation),
                Err(FloatMapError::NoSuchNeighbor { relation: found, .. }) if found == relation
            ));
        }
    }

    #[test]
    fn signed_zero_ties() {
        let map = FloatMap::try_from_pairs([(-1.0, 'n'), (0.0, 'z'), (1.0, 'p')]).unwrap();
        assert_eq!(map.find_lt(-0.0), Ok((-1.0, &'n')));
        assert_eq!(map.find_ge(-0.0), Ok((0.0, &'z')));
        assert_eq!(map.find_gt(-0.0), Ok((1.0, &'p')));
    }

    #[test]
    fn relation_holds() {
        assert!(Relation::Lt.holds(1.0, 2.0));
        assert!(!Relation::Lt.holds(2.0, 2.0));
        assert!(Relation::Le.holds(2.0, 2.0));
        assert!(Relation::Ge.holds(2.0, 2.0));
        assert!(!Relation::Gt.holds(2.0, 2.0));
        assert!(!Relation::Ge.holds(2.0, f64::NAN));
    }
}
