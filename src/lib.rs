//! A sorted map keyed by `f64`, with lookups and the four directional neighbor queries in `O(log n)`.
//!
//! ```
//! use float_map::FloatMap;
//!
//! let mut map = FloatMap::new();
//! map.set(3.0, "c")?;
//! map.set(1.0, "a")?;
//! map.set(2, "b")?;
//!
//! assert_eq!(map.get(2.0)?, &"b");
//! assert_eq!(map.find_lt(2.0)?, (1.0, &"a"));
//! assert_eq!(map.find_ge(2.5)?, (3.0, &"c"));
//! assert!(map.find_gt(3.0).is_err());
//! # Ok::<(), float_map::FloatMapError>(())
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod error;
mod iter;
mod key;
mod map;
mod neighbor;
#[cfg(feature = "serde")]
mod serde;

pub use error::{FloatMapError, Result};
pub use iter::{IntoIter, Iter};
pub use map::FloatMap;
pub use neighbor::Relation;
