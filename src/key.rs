//! Key validation and the binary searches every map operation reduces to.
//!
//! Keys are compared with IEEE `<`/`==`, so `-0.0` and `0.0` are the same key. NaN is never stored, which keeps the
//! comparison a total order over the stored keys.

use num_traits::ToPrimitive;

use crate::error::{FloatMapError, Result};

/// Converts a key to the `f64` it is stored as, rejecting NaN
pub(crate) fn coerce<K: ToPrimitive>(key: K) -> Result<f64> {
    let key = key.to_f64().ok_or(FloatMapError::UnrepresentableKey)?;
    if key.is_nan() {
        Err(FloatMapError::NanKey)
    } else {
        Ok(key)
    }
}

/// The leftmost index where `key` could be inserted with every key before it strictly less than `key`
pub(crate) fn lower_bound(keys: &[f64], key: f64) -> usize {
    keys.partition_point(|&stored| stored < key)
}

/// The leftmost index where `key` could be inserted with every key before it less than or equal to `key`
pub(crate) fn upper_bound(keys: &[f64], key: f64) -> usize {
    keys.partition_point(|&stored| stored <= key)
}

/// Applies a lower bound search and checks for an exact match.
///
/// Returns `Ok(index)` if `key` is stored at `index`, and otherwise `Err(index)` with the index at which it would be
/// inserted, mirroring `slice::binary_search`
pub(crate) fn search(keys: &[f64], key: f64) -> Result<usize, usize> {
    let index = lower_bound(keys, key);
    match keys.get(index) {
        Some(&stored) if stored == key => Ok(index),
        _ => Err(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [f64; 4] = [-1.5, 0.0, 2.0, 7.25];

    #[test]
    fn coerce_accepts_numbers() {
        assert_eq!(coerce(3_i32), Ok(3.0));
        assert_eq!(coerce(0.5_f32), Ok(0.5));
        assert_eq!(coerce(u64::MAX), Ok(u64::MAX as f64));
        assert_eq!(coerce(f64::INFINITY), Ok(f64::INFINITY));
    }

    #[test]
    fn coerce_rejects_nan() {
        assert_eq!(coerce(f64::NAN), Err(FloatMapError::NanKey));
        assert_eq!(coerce(f32::NAN), Err(FloatMapError::NanKey));
    }

    #[test]
    fn bounds_straddle_exact_matches() {
        assert_eq!(lower_bound(&KEYS, 2.0), 2);
        assert_eq!(upper_bound(&KEYS, 2.0), 3);
        assert_eq!(lower_bound(&KEYS, 1.0), 2);
        assert_eq!(upper_bound(&KEYS, 1.0), 2);
        assert_eq!(lower_bound(&KEYS, -10.0), 0);
        assert_eq!(upper_bound(&KEYS, 10.0), KEYS.len());
        assert_eq!(lower_bound(&[], 1.0), 0);
    }

    #[test]
    fn search_reports_insertion_point() {
        assert_eq!(search(&KEYS, 7.25), Ok(3));
        assert_eq!(search(&KEYS, 7.0), Err(3));
        assert_eq!(search(&KEYS, -0.0), Ok(1));
        assert_eq!(search(&KEYS, f64::NAN), Err(0));
    }
}
