//! A sorted map keyed by `f64`. Keys and values are stored in two index-aligned arrays sorted by key and looked up via
//! binary search, trading `O(n)` insertion and removal for `O(log n)` lookups and contiguous iteration

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::mem;
use core::ops::{Bound, RangeBounds};

use log::{debug, trace, warn};
use num_traits::ToPrimitive;

use crate::error::{FloatMapError, Result};
use crate::iter::{IntoIter, Iter};
use crate::key;

/// A map from `f64` keys to values, implemented as a pair of sorted arrays
///
/// `keys` is strictly increasing, and `values[i]` is the value stored under `keys[i]`. NaN is never accepted as a key.
#[derive(Clone)]
pub struct FloatMap<V> {
    /// The stored keys, strictly increasing
    pub(crate) keys: Vec<f64>,
    /// The stored values, aligned with `keys`
    pub(crate) values: Vec<V>,
}

impl<V> FloatMap<V> {
    /// Creates a new, empty `FloatMap`. Does not allocate until used
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty `FloatMap` with room for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Builds a map from key-value pairs.
    ///
    /// The result is the same as calling [`set`](Self::set) for each pair in order: when a key repeats, the later
    /// value replaces the earlier one. Fails without building anything if any key is NaN or cannot be converted to an
    /// `f64`.
    ///
    /// Takes `O(n log n)` time, sorting the pairs once rather than inserting them one by one.
    pub fn try_from_pairs<K, I>(pairs: I) -> Result<Self>
    where
        K: ToPrimitive,
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(key, value)| Ok((key::coerce(key)?, value)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_valid_pairs(pairs))
    }

    /// Sorts and deduplicates pairs whose keys are already known not to be NaN
    fn from_valid_pairs(mut pairs: Vec<(f64, V)>) -> Self {
        let received = pairs.len();
        // Without NaN the comparison is total. The sort is stable, so equal keys stay in insertion order
        pairs.sort_by(|&(ref key1, _), &(ref key2, _)| {
            key1.partial_cmp(key2).unwrap_or(Ordering::Equal)
        });

        let mut map = Self::with_capacity(pairs.len());
        for (key, value) in pairs {
            if map.keys.last() == Some(&key) {
                // The first key written is the one kept, as with `set`
                if let Some(slot) = map.values.last_mut() {
                    *slot = value;
                }
            } else {
                map.keys.push(key);
                map.values.push(value);
            }
        }

        debug!("built map of {} entries from {received} pairs", map.len());
        map
    }

    /// Returns the number of entries in the map
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map contains no entries
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes every entry, keeping the allocated storage
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Returns a reference to the value stored under exactly `key`
    pub fn get(&self, key: f64) -> Result<&V> {
        key::search(&self.keys, key)
            .ok()
            .and_then(|index| self.values.get(index))
            .ok_or(FloatMapError::KeyNotFound(key))
    }

    /// Returns a mutable reference to the value stored under exactly `key`
    pub fn get_mut(&mut self, key: f64) -> Result<&mut V> {
        key::search(&self.keys, key)
            .ok()
            .and_then(|index| self.values.get_mut(index))
            .ok_or(FloatMapError::KeyNotFound(key))
    }

    /// Inserts a key-value pair into the map. The key is first converted to an `f64`.
    ///
    /// If the map did not have this key present, `None` is returned and later entries shift over by one.
    ///
    /// If the map did have this key present, the value is updated in place, and the old value is returned. The stored
    /// key is left as is, which only matters for `0.0` and `-0.0`.
    pub fn set<K: ToPrimitive>(&mut self, key: K, value: V) -> Result<Option<V>> {
        let key = key::coerce(key)?;
        match key::search(&self.keys, key) {
            Ok(index) => Ok(Some(mem::replace(
                #[allow(clippy::indexing_slicing, reason = "The indexing should never fail")]
                &mut self.values[index],
                value,
            ))),
            Err(index) => {
                trace!("inserting key {key:?} at index {index}");
                self.keys.insert(index, key);
                self.values.insert(index, value);
                Ok(None)
            }
        }
    }

    /// Removes exactly `key` from the map, returning the value it held
    pub fn remove(&mut self, key: f64) -> Result<V> {
        let index =
            key::search(&self.keys, key).map_err(|_index| FloatMapError::KeyNotFound(key))?;
        trace!("removing key {key:?} at index {index}");
        self.keys.remove(index);
        Ok(self.values.remove(index))
    }

    /// Returns `true` if exactly `key` is stored in the map
    pub fn contains(&self, key: f64) -> bool {
        key::search(&self.keys, key).is_ok()
    }

    /// The stored keys in ascending order
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// The stored values, in ascending order of their keys
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// An iterator visiting all key-value pairs in ascending order by key
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.keys, &self.values)
    }

    /// An iterator visiting all key-value pairs in descending order by key
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, V>> {
        self.iter().rev()
    }

    /// An iterator over the entries whose keys fall within `range`, in ascending order by key.
    ///
    /// A NaN bound matches nothing, so the iterator is empty.
    pub fn range<R: RangeBounds<f64>>(&self, range: R) -> Iter<'_, V> {
        let start = match range.start_bound() {
            Bound::Included(&key) if !key.is_nan() => key::lower_bound(&self.keys, key),
            Bound::Excluded(&key) if !key.is_nan() => key::upper_bound(&self.keys, key),
            Bound::Unbounded => 0,
            _ => self.len(),
        };
        let end = match range.end_bound() {
            Bound::Included(&key) if !key.is_nan() => key::upper_bound(&self.keys, key),
            Bound::Excluded(&key) if !key.is_nan() => key::lower_bound(&self.keys, key),
            Bound::Unbounded => self.len(),
            _ => 0,
        };
        let end = end.max(start);

        Iter::new(
            self.keys.get(start..end).unwrap_or_default(),
            self.values.get(start..end).unwrap_or_default(),
        )
    }

    /// The entry with the smallest key
    pub fn first(&self) -> Option<(f64, &V)> {
        Some((*self.keys.first()?, self.values.first()?))
    }

    /// The entry with the largest key
    pub fn last(&self) -> Option<(f64, &V)> {
        Some((*self.keys.last()?, self.values.last()?))
    }

    /// Retains only the entries for which `filter` returns `true`, visiting them in ascending order by key
    pub fn retain<F: FnMut(f64, &V) -> bool>(&mut self, mut filter: F) {
        let keys = mem::take(&mut self.keys);
        let values = mem::take(&mut self.values);
        for (key, value) in keys.into_iter().zip(values) {
            if filter(key, &value) {
                self.keys.push(key);
                self.values.push(value);
            }
        }
    }
}

impl<V: Clone> FloatMap<V> {
    /// Copies out the entries in ascending order by key.
    ///
    /// Passing the result to [`try_from_pairs`](Self::try_from_pairs) rebuilds an equal map.
    pub fn to_pairs(&self) -> Vec<(f64, V)> {
        self.iter().map(|(key, value)| (key, value.clone())).collect()
    }
}

impl<V: Debug> Debug for FloatMap<V> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Formats as `FloatMap([(0.0, a), (0.5, b)])`
///
/// Keys use the `Debug` form of `f64`, so large and small magnitudes print as `1e16` and `1e-7` rather than with a
/// signed exponent
impl<V: Display> Display for FloatMap<V> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("FloatMap([")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index != 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "({key:?}, {value})")?;
        }
        formatter.write_str("])")
    }
}

/// Two maps are equal when they hold the same keys with equal values
impl<V: PartialEq> PartialEq for FloatMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<V> Default for FloatMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for FloatMap<V> {
    type Item = (f64, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.keys, self.values)
    }
}

impl<'map, V> IntoIterator for &'map FloatMap<V> {
    type Item = (f64, &'map V);
    type IntoIter = Iter<'map, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects pairs with the same semantics as [`FloatMap::try_from_pairs`], except that NaN keys are skipped
impl<V> FromIterator<(f64, V)> for FloatMap<V> {
    fn from_iter<T: IntoIterator<Item = (f64, V)>>(iter: T) -> Self {
        let pairs = iter
            .into_iter()
            .filter(|&(key, _)| {
                if key.is_nan() {
                    warn!("skipping entry with NaN key");
                }
                !key.is_nan()
            })
            .collect();
        Self::from_valid_pairs(pairs)
    }
}

/// Sets each pair in order. Entries with NaN keys are skipped
impl<V> Extend<(f64, V)> for FloatMap<V> {
    fn extend<T: IntoIterator<Item = (f64, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            if let Err(err) = self.set(key, value) {
                warn!("skipping entry: {err}");
            }
        }
    }
}

impl<V> TryFrom<Vec<(f64, V)>> for FloatMap<V> {
    type Error = FloatMapError;

    fn try_from(pairs: Vec<(f64, V)>) -> Result<Self> {
        if pairs.iter().any(|&(key, _)| key.is_nan()) {
            return Err(FloatMapError::NanKey);
        }
        Ok(Self::from_valid_pairs(pairs))
    }
}

impl<V> From<FloatMap<V>> for Vec<(f64, V)> {
    fn from(map: FloatMap<V>) -> Self {
        map.into_iter().collect()
    }
}
