/*!
Prototype cache.

A [`PrototypeCache`] maps canonical algorithm names to shared prototype
instances of a single primitive kind. The lock guarding the map is held
only for the lookup or insertion itself, never while an instance is
being searched for or destroyed.
*/

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::lock_api::{Mutex, RawMutex};

use crate::core::crypto::traits::Algorithm;
use crate::core::sync::{DefaultRawMutex, MutexFactory};

/// Mutex-guarded map from canonical name to prototype
pub struct PrototypeCache<T: ?Sized, R: RawMutex = DefaultRawMutex> {
    mappings: Mutex<R, HashMap<String, Arc<T>>>,
}

impl<T, R> PrototypeCache<T, R>
where
    T: ?Sized + Algorithm,
    R: RawMutex,
{
    /// Create an empty cache guarded by a lock from `factory`
    pub fn new<F: MutexFactory<Raw = R>>(factory: &F) -> Self {
        Self {
            mappings: factory.make(HashMap::new()),
        }
    }

    /// Look up the prototype cached under `name`
    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.mappings.lock().get(name).cloned()
    }

    /// Cache `algo` under `index_name`, or under its own name if none is given.
    ///
    /// An entry already cached under the same name is replaced. The
    /// replaced prototype is released once the lock has been dropped, and
    /// is destroyed as soon as no caller holds it anymore.
    ///
    /// Returns the handle now cached under that name.
    pub fn add(&self, algo: Arc<T>, index_name: Option<&str>) -> Arc<T> {
        let name = match index_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => algo.name(),
        };

        let superseded = self.mappings.lock().insert(name.clone(), Arc::clone(&algo));

        if let Some(previous) = superseded {
            log::debug!(
                "Replaced cached prototype {name} ({} outstanding handles to the old one)",
                Arc::strong_count(&previous) - 1
            );
        }
        algo
    }

    /// Number of cached prototypes
    pub fn len(&self) -> usize {
        self.mappings.lock().len()
    }

    /// Check whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.mappings.lock().is_empty()
    }

    /// Sorted names of all cached prototypes
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.mappings.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

impl<T: ?Sized, R: RawMutex> Drop for PrototypeCache<T, R> {
    fn drop(&mut self) {
        let mappings = self.mappings.get_mut();
        if !mappings.is_empty() {
            log::trace!("Releasing {} cached prototypes", mappings.len());
        }
    }
}
