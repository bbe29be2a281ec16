//! # Data Context
//!
//! [`DataContext`] is the per-event container: created when an action is invoked or a
//! selection changes, populated by producers, read by consumers, then dropped. Values are
//! stored type-erased and only ever handed back through a key of the matching type.
//!
//! ```rust
//! use prctx_kernel::{DataContext, DataKey};
//!
//! const BRANCH: DataKey<String> = DataKey::new("org.example.vcs.branch");
//!
//! let mut ctx = DataContext::new();
//! assert!(ctx.get(&BRANCH).is_none());
//!
//! ctx.set(&BRANCH, "main".to_owned());
//! assert_eq!(ctx.get(&BRANCH).map(String::as_str), Some("main"));
//! ```

use crate::error::ContextError;
use crate::key::{ContextValue, DataKey};
use crate::provider::DataProvider;
use fxhash::FxHashMap;
use std::any::Any;
use tracing::{trace, warn};

type Slot = Box<dyn Any + Send + Sync>;

/// Transient mapping from keys to values, owned by one event scope.
#[derive(Debug, Default)]
pub struct DataContext {
    values: FxHashMap<&'static str, Slot>,
}

impl DataContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a context from providers ordered nearest-first.
    ///
    /// Each provider only fills keys that are still absent, so the nearest provider
    /// (e.g. the focused component) wins over its ancestors.
    pub fn from_providers<'a, I>(providers: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn DataProvider>,
    {
        let mut ctx = Self::new();
        for provider in providers {
            let mut layer = Self::new();
            provider.provide(&mut layer);
            ctx.absorb(layer);
        }
        ctx
    }

    /// Returns the value bound to `key`, or `None` if it was never set.
    #[must_use]
    pub fn get<T: ContextValue>(&self, key: &DataKey<T>) -> Option<&T> {
        let slot = self.values.get(key.id())?;
        let value = slot.downcast_ref::<T>();
        if value.is_none() {
            warn!(key = key.id(), requested = key.type_name(), "Context value has a foreign type");
        }
        value
    }

    /// Like [`DataContext::get`], but absence is an error.
    ///
    /// # Errors
    /// Returns [`ContextError::MissingData`] if `key` is not bound.
    pub fn require<T: ContextValue>(&self, key: &DataKey<T>) -> Result<&T, ContextError> {
        self.get(key).ok_or_else(|| ContextError::MissingData {
            message: key.id().into(),
            context: None,
        })
    }

    /// Binds `value` to `key` in this context only. A previous binding is replaced.
    ///
    /// The context does not consult a [`KeyRegistry`](crate::KeyRegistry): a key built
    /// outside the registry with a taken identifier replaces the binding even when the
    /// value types differ, after which the registered key reads as absent. Such
    /// replacements are logged at `warn`.
    pub fn set<T: ContextValue>(&mut self, key: &DataKey<T>, value: T) {
        if let Some(previous) = self.values.get(key.id())
            && !previous.is::<T>()
        {
            warn!(
                key = key.id(),
                value_type = key.type_name(),
                "Binding replaced with a foreign type"
            );
        }
        trace!(key = key.id(), "Context value bound");
        self.values.insert(key.id(), Box::new(value));
    }

    /// Builder form of [`DataContext::set`].
    #[must_use]
    pub fn with<T: ContextValue>(mut self, key: &DataKey<T>, value: T) -> Self {
        self.set(key, value);
        self
    }

    /// Binds `value` unless `key` is already bound. Returns `true` if it was stored.
    pub fn set_if_absent<T: ContextValue>(&mut self, key: &DataKey<T>, value: T) -> bool {
        if self.values.contains_key(key.id()) {
            return false;
        }
        self.set(key, value);
        true
    }

    /// Removes and returns the binding of `key`.
    pub fn remove<T: ContextValue>(&mut self, key: &DataKey<T>) -> Option<T> {
        let slot = self.values.remove(key.id())?;
        match slot.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(slot) => {
                // Not ours to drop: put the foreign value back.
                self.values.insert(key.id(), slot);
                None
            },
        }
    }

    #[must_use]
    pub fn contains<T: ContextValue>(&self, key: &DataKey<T>) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Identifiers bound in this context.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub(crate) fn into_slots(self) -> impl Iterator<Item = (&'static str, Slot)> {
        self.values.into_iter()
    }

    fn absorb(&mut self, other: Self) {
        for (id, slot) in other.values {
            self.values.entry(id).or_insert(slot);
        }
    }
}
