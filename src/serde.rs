//! Serialization of a [`FloatMap`] as its ascending sequence of `(key, value)` pairs.
//!
//! Deserializing rebuilds the map through [`FloatMap::try_from_pairs`], so the input need not be sorted, repeated keys
//! keep the last value, and NaN keys are an error.

use alloc::vec::Vec;
use core::fmt::{self, Formatter};
use core::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{Serialize, Serializer};

use crate::map::FloatMap;

/// Caps the preallocation driven by an untrusted length hint
const MAX_PREALLOCATED_PAIRS: usize = 4096;

impl<V: Serialize> Serialize for FloatMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct FloatMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for FloatMapVisitor<V> {
    type Value = FloatMap<V>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of (key, value) pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::with_capacity(
            seq.size_hint()
                .unwrap_or(0)
                .min(MAX_PREALLOCATED_PAIRS),
        );
        while let Some(pair) = seq.next_element::<(f64, V)>()? {
            pairs.push(pair);
        }
        FloatMap::try_from_pairs(pairs).map_err(de::Error::custom)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for FloatMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FloatMapVisitor(PhantomData))
    }
}
