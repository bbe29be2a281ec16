//! Facade crate for the context registry and its feature slices.
//! Re-exports domain/kernel primitives and assembles the process-wide key registry.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! Call [`init`] once at startup and hand the returned [`KeyRegistry`] to every
//! component that resolves keys by identifier.
//!
//! ```rust
//! use prctx::domain::config::RegistryConfig;
//!
//! let registry = prctx::init(&RegistryConfig::default()).expect("keys are unique");
//! assert!(registry.contains("org.prctx.pullrequest.list.selected"));
//! ```

pub use prctx_domain as domain;
pub use prctx_kernel as kernel;
#[cfg(feature = "pullrequest")]
pub use prctx_pullrequest as pullrequest;

use prctx_domain::config::{AppConfig, RegistryConfig};
use prctx_kernel::config::ConfigError;
use prctx_kernel::{ContextError, KeyRegistry};
use std::path::Path;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "pullrequest")]
        "pullrequest",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Registers the keys of every enabled feature and freezes the registry.
///
/// # Errors
/// Returns [`ContextError::DuplicateKey`] if two features claim the same identifier, or
/// [`ContextError::InvalidKey`] if an identifier breaks the configured rules.
pub fn init(config: &RegistryConfig) -> Result<KeyRegistry, ContextError> {
    #[allow(unused_mut)]
    let mut builder = KeyRegistry::builder().config(config.clone());

    #[cfg(feature = "pullrequest")]
    pullrequest::register(&mut builder)?;

    let registry = builder.build();
    tracing::info!(
        features = ?features::ENABLED,
        keys = registry.len(),
        require_namespace = registry.config().require_namespace,
        "Context registry initialized"
    );
    Ok(registry)
}

/// Loads [`AppConfig`] from `path` (plus `PRCTX__*` environment overrides).
///
/// # Errors
/// Returns [`ConfigError`] if the sources cannot be read or deserialized.
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    prctx_kernel::config::load_config(path)
}
