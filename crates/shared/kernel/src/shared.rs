//! # Shared Data Context
//!
//! A context that may be populated from background tasks while consumers already read
//! it. Every key is **write-once**: the first `set` wins and later attempts fail with
//! [`ContextError::AlreadyBound`]. The only ordering guarantee is that a completed `set`
//! happens-before any `get` that observes it.

use crate::context::DataContext;
use crate::error::ContextError;
use crate::key::{ContextValue, DataKey};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;
use tracing::{trace, warn};

type SharedSlot = Arc<dyn Any + Send + Sync>;

/// Cloneable, thread-safe, write-once context. Clones share the same bindings.
#[derive(Debug, Clone, Default)]
pub struct SharedDataContext {
    values: Arc<RwLock<FxHashMap<&'static str, SharedSlot>>>,
}

impl SharedDataContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `key`, if any.
    #[must_use]
    pub fn get<T: ContextValue>(&self, key: &DataKey<T>) -> Option<Arc<T>> {
        let slot = Arc::clone(self.values.read().get(key.id())?);
        match slot.downcast::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(key = key.id(), requested = key.type_name(), "Context value has a foreign type");
                None
            },
        }
    }

    /// Like [`SharedDataContext::get`], but absence is an error.
    ///
    /// # Errors
    /// Returns [`ContextError::MissingData`] if `key` is not bound.
    pub fn require<T: ContextValue>(&self, key: &DataKey<T>) -> Result<Arc<T>, ContextError> {
        self.get(key).ok_or_else(|| ContextError::MissingData {
            message: key.id().into(),
            context: None,
        })
    }

    /// Binds `value` to `key` exactly once.
    ///
    /// # Errors
    /// Returns [`ContextError::AlreadyBound`] if `key` already has a binding.
    pub fn set<T: ContextValue>(&self, key: &DataKey<T>, value: T) -> Result<(), ContextError> {
        let mut values = self.values.write();
        if values.contains_key(key.id()) {
            return Err(ContextError::AlreadyBound { message: key.id().into(), context: None });
        }
        values.insert(key.id(), Arc::new(value));
        trace!(key = key.id(), "Shared context value bound");
        Ok(())
    }

    #[must_use]
    pub fn contains<T: ContextValue>(&self, key: &DataKey<T>) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl From<DataContext> for SharedDataContext {
    /// Moves the bindings of a populated single-event context into a shared one.
    fn from(context: DataContext) -> Self {
        let values = context.into_slots().map(|(id, slot)| (id, SharedSlot::from(slot))).collect();
        Self { values: Arc::new(RwLock::new(values)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const SCORE: DataKey<u64> = DataKey::new("test.score");
    const FOREIGN: DataKey<String> = DataKey::new("test.score");

    #[test]
    fn write_once() {
        let ctx = SharedDataContext::new();
        ctx.set(&SCORE, 1).expect("first set");

        let err = ctx.set(&SCORE, 2).expect_err("second set accepted");
        assert!(matches!(err, ContextError::AlreadyBound { .. }));
        assert_eq!(ctx.get(&SCORE).as_deref(), Some(&1));
    }

    #[test]
    fn clones_share_bindings() {
        let ctx = SharedDataContext::new();
        let writer = ctx.clone();

        thread::spawn(move || writer.set(&SCORE, 99))
            .join()
            .expect("writer thread panicked")
            .expect("set failed");

        assert_eq!(ctx.get(&SCORE).as_deref(), Some(&99));
        assert!(ctx.get(&FOREIGN).is_none());
    }

    #[test]
    fn concurrent_writers_bind_once() {
        let ctx = SharedDataContext::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let ctx = ctx.clone();
                thread::spawn(move || ctx.set(&SCORE, i).is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().expect("writer thread panicked"))
            .filter(|ok| *ok)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn converts_from_data_context() {
        let local = DataContext::new().with(&SCORE, 5);
        let shared = SharedDataContext::from(local);
        assert_eq!(shared.get(&SCORE).as_deref(), Some(&5));
        assert!(shared.set(&SCORE, 6).is_err());
    }
}
