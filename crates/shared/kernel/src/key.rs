//! Typed identifiers for context slots.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker for values that may be bound in a context.
///
/// Any `Send + Sync + 'static` type qualifies.
pub trait ContextValue: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> ContextValue for T {}

/// A process-wide identifier bound to the value type `T`.
///
/// Keys are immutable constants, usually declared as `pub const` items and
/// registered once in a [`KeyRegistry`](crate::registry::KeyRegistry). Equality and
/// hashing use the identifier only; the registry guarantees one value type per
/// identifier, so equal keys are interchangeable.
///
/// ```rust
/// use prctx_kernel::DataKey;
///
/// const BRANCH: DataKey<String> = DataKey::new("org.example.vcs.branch");
/// assert_eq!(BRANCH.id(), "org.example.vcs.branch");
/// ```
pub struct DataKey<T: 'static> {
    id: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T: 'static> DataKey<T> {
    /// Declares a key. Registration happens separately.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self { id, marker: PhantomData }
    }

    /// The unique, namespaced identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn value_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

// Manual impls: derives would require `T: Clone`, `T: Eq`, ...
impl<T: 'static> Clone for DataKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for DataKey<T> {}

impl<T: 'static> PartialEq for DataKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: 'static> Eq for DataKey<T> {}

impl<T: 'static> Hash for DataKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: 'static> fmt::Debug for DataKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataKey").field("id", &self.id).field("type", &self.type_name()).finish()
    }
}

impl<T: 'static> fmt::Display for DataKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// Registry-side description of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    id: &'static str,
    type_id: TypeId,
    type_name: &'static str,
}

impl KeyInfo {
    pub(crate) fn of<T: 'static>(key: &DataKey<T>) -> Self {
        Self { id: key.id(), type_id: key.value_type_id(), type_name: key.type_name() }
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the key was registered for `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: DataKey<u32> = DataKey::new("test.a");

    #[test]
    fn keys_compare_by_id() {
        let other: DataKey<u32> = DataKey::new("test.a");
        assert_eq!(A, other);
        assert_ne!(A, DataKey::<u32>::new("test.b"));
    }

    #[test]
    fn debug_shows_id_and_type() {
        let dbg = format!("{A:?}");
        assert!(dbg.contains("test.a"));
        assert!(dbg.contains("u32"));
        assert_eq!(A.to_string(), "test.a");
    }

    #[test]
    fn info_tracks_type() {
        let info = KeyInfo::of(&A);
        assert_eq!(info.id(), "test.a");
        assert!(info.is::<u32>());
        assert!(!info.is::<u64>());
    }
}
