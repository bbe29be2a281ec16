//! # Key Registry
//!
//! The single source of truth for key identifiers. A [`KeyRegistryBuilder`] collects
//! registrations during startup and [`KeyRegistryBuilder::build`] freezes them into an
//! immutable, cheaply cloneable [`KeyRegistry`].
//!
//! ## Collision policy
//!
//! Registration is **fail-fast**: registering an identifier that is already known, for
//! the same or a different value type, returns [`ContextError::DuplicateKey`]. Declaring
//! a key in two modules is a programming error and must surface before any event is
//! handled.
//!
//! ```rust
//! use prctx_kernel::{ContextError, DataKey, KeyRegistry};
//!
//! const BRANCH: DataKey<String> = DataKey::new("org.example.vcs.branch");
//!
//! # fn main() -> Result<(), ContextError> {
//! let mut builder = KeyRegistry::builder();
//! builder.declare(BRANCH)?;
//! let commit = builder.create::<u64>("org.example.vcs.commit")?;
//!
//! assert!(builder.create::<u64>("org.example.vcs.commit").is_err());
//!
//! let registry = builder.build();
//! assert_eq!(registry.resolve::<u64>("org.example.vcs.commit")?, commit);
//! # Ok(())
//! # }
//! ```

use crate::error::ContextError;
use crate::key::{DataKey, KeyInfo};
use fxhash::FxHashMap;
use prctx_domain::config::RegistryConfig;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const NAMESPACE_SEPARATOR: char = '.';

#[derive(Debug)]
struct KeyRegistryInner {
    config: RegistryConfig,
    keys: FxHashMap<&'static str, KeyInfo>,
}

/// Immutable set of registered keys, shared by every context consumer.
#[derive(Debug, Clone)]
pub struct KeyRegistry {
    inner: Arc<KeyRegistryInner>,
}

impl KeyRegistry {
    /// Starts a registry with the default identifier rules.
    #[must_use]
    pub fn builder() -> KeyRegistryBuilder {
        KeyRegistryBuilder::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.keys.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.inner.keys.contains_key(id)
    }

    #[must_use]
    pub fn info(&self, id: &str) -> Option<&KeyInfo> {
        self.inner.keys.get(id)
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.inner.config
    }

    /// Registered keys ordered by identifier (for diagnostics).
    pub fn iter(&self) -> impl Iterator<Item = &KeyInfo> {
        let mut keys: Vec<_> = self.inner.keys.values().collect();
        keys.sort_unstable_by_key(|info| info.id());
        keys.into_iter()
    }

    /// Returns the typed key registered under a literal identifier.
    ///
    /// # Errors
    /// * [`ContextError::UnregisteredKey`] if `id` is unknown.
    /// * [`ContextError::TypeMismatch`] if `id` is registered for another type.
    pub fn resolve<T: 'static>(&self, id: &str) -> Result<DataKey<T>, ContextError> {
        let info = self.info(id).ok_or_else(|| ContextError::UnregisteredKey {
            message: id.to_owned().into(),
            context: None,
        })?;
        check_type::<T>(info)?;
        Ok(DataKey::new(info.id()))
    }

    /// Checks that a declared key is registered with its own value type.
    ///
    /// # Errors
    /// See [`KeyRegistry::resolve`].
    pub fn verify<T: 'static>(&self, key: &DataKey<T>) -> Result<(), ContextError> {
        self.resolve::<T>(key.id()).map(|_| ())
    }
}

/// Collects key registrations before the registry is frozen.
#[derive(Debug, Default)]
pub struct KeyRegistryBuilder {
    config: RegistryConfig,
    keys: FxHashMap<&'static str, KeyInfo>,
}

impl KeyRegistryBuilder {
    /// Replaces the identifier rules. Applies to subsequent registrations only.
    #[must_use]
    pub fn config(mut self, config: RegistryConfig) -> Self {
        if config.has_empty_prefix() {
            warn!("Empty entries in allowed_prefixes match no identifier");
        }
        self.config = config;
        self
    }

    /// Creates and registers a new key for `T`.
    ///
    /// # Errors
    /// * [`ContextError::InvalidKey`] if `id` breaks the identifier rules.
    /// * [`ContextError::DuplicateKey`] if `id` is already registered.
    pub fn create<T: 'static>(&mut self, id: &'static str) -> Result<DataKey<T>, ContextError> {
        let key = DataKey::new(id);
        self.declare(key)?;
        Ok(key)
    }

    /// Registers a key declared elsewhere, typically a `const`.
    ///
    /// # Errors
    /// See [`KeyRegistryBuilder::create`].
    pub fn declare<T: 'static>(&mut self, key: DataKey<T>) -> Result<&mut Self, ContextError> {
        self.validate(key.id())?;

        if let Some(existing) = self.keys.get(key.id()) {
            error!(
                key = key.id(),
                registered = existing.type_name(),
                requested = key.type_name(),
                "Duplicate context key registration"
            );
            return Err(ContextError::DuplicateKey {
                message: key.id().into(),
                context: Some(format!("already registered for {}", existing.type_name()).into()),
            });
        }

        debug!(key = key.id(), value_type = key.type_name(), "Context key registered");
        self.keys.insert(key.id(), KeyInfo::of(&key));
        Ok(self)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.keys.contains_key(id)
    }

    /// Freezes the registrations.
    #[must_use]
    pub fn build(self) -> KeyRegistry {
        info!(keys = self.keys.len(), "Context key registry frozen");
        KeyRegistry { inner: Arc::new(KeyRegistryInner { config: self.config, keys: self.keys }) }
    }

    fn validate(&self, id: &'static str) -> Result<(), ContextError> {
        let reason = if id.is_empty() {
            Some("identifier cannot be empty")
        } else if id.chars().any(char::is_whitespace) {
            Some("identifier cannot contain whitespace")
        } else if self.config.require_namespace && !is_namespaced(id) {
            Some("identifier must be namespaced, e.g. `<domain>.<subsystem>.<purpose>`")
        } else if !self.config.is_prefix_allowed(id) {
            Some("identifier is outside the allowed prefixes")
        } else {
            None
        };

        match reason {
            Some(reason) => {
                error!(key = id, reason, "Invalid context key");
                Err(ContextError::InvalidKey { message: reason.into(), context: Some(id.into()) })
            },
            None => Ok(()),
        }
    }
}

fn is_namespaced(id: &str) -> bool {
    let mut segments = id.split(NAMESPACE_SEPARATOR);
    let count = segments.clone().count();
    count >= 2 && segments.all(|segment| !segment.is_empty())
}

fn check_type<T: 'static>(info: &KeyInfo) -> Result<(), ContextError> {
    if info.is::<T>() {
        Ok(())
    } else {
        Err(ContextError::TypeMismatch {
            message: format!(
                "'{}' holds {}, requested {}",
                info.id(),
                info.type_name(),
                std::any::type_name::<T>()
            )
            .into(),
            context: None,
        })
    }
}
