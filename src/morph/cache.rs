use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, PoisonError, RwLock},
};

use crate::morph::interpolator::{Interpolator, Morpher};

/// Insert-only memo table shared between threads.
///
/// Values are immutable once stored and handed out as `Arc`s. Concurrent misses on the
/// same key may both compute; the last insert wins and both results are equivalent.
#[derive(Debug)]
pub(crate) struct Memo<K, V> {
    entries: RwLock<HashMap<K, Arc<V>>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash, V> Memo<K, V> {
    pub(crate) fn get_or_insert_with(&self, key: K, make: impl FnOnce() -> V) -> Arc<V> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = entries.get(&key) {
                return Arc::clone(hit);
            }
        }
        let value = Arc::new(make());
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&value));
        value
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Wraps any [`Morpher`] and memoizes whole interpolators by `(from, to)`.
///
/// Useful when the same pair of shapes is morphed repeatedly, e.g. a looping animation.
#[derive(Debug)]
pub struct CachedMorpher<M> {
    inner: M,
    interpolators: Memo<(String, String), Interpolator>,
}

impl<M: Morpher> CachedMorpher<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            interpolators: Memo::default(),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of memoized interpolators.
    pub fn cached(&self) -> usize {
        self.interpolators.len()
    }

    /// Drop every memoized interpolator.
    pub fn clear(&self) {
        self.interpolators.clear();
    }
}

impl<M: Morpher> Morpher for CachedMorpher<M> {
    fn create_interpolator(&self, from: &str, to: &str) -> Interpolator {
        let key = (from.to_owned(), to.to_owned());
        let entry = self.interpolators.get_or_insert_with(key, || {
            tracing::debug!(strategy = self.inner.name(), "interpolator cache miss");
            self.inner.create_interpolator(from, to)
        });
        Interpolator::clone(&entry)
    }

    fn dispose(&self) {
        self.clear();
        self.inner.dispose();
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/cache.rs"]
mod tests;
