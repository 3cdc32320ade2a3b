//! Iterators over the entries of a [`FloatMap`](crate::FloatMap). All of them walk the key and value arrays in
//! lockstep and can be reversed

use alloc::vec::{self, Vec};
use core::iter::{FusedIterator, Zip};
use core::slice;

/// A borrowing iterator over `(key, &value)` pairs in ascending order by key
pub struct Iter<'map, V> {
    inner: Zip<slice::Iter<'map, f64>, slice::Iter<'map, V>>,
}

impl<'map, V> Iter<'map, V> {
    pub(crate) fn new(keys: &'map [f64], values: &'map [V]) -> Self {
        Self {
            inner: keys.iter().zip(values),
        }
    }
}

impl<'map, V> Iterator for Iter<'map, V> {
    type Item = (f64, &'map V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&key, value)| (key, value))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over `(key, value)` pairs in ascending order by key
pub struct IntoIter<V> {
    inner: Zip<vec::IntoIter<f64>, vec::IntoIter<V>>,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(keys: Vec<f64>, values: Vec<V>) -> Self {
        Self {
            inner: keys.into_iter().zip(values),
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (f64, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}
