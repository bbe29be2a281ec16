use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides (`PRCTX__REGISTRY__REQUIRE_NAMESPACE=false`).
pub const ENV_PREFIX: &str = "PRCTX";

/// Custom error type for config loading.
#[prctx_derive::prctx_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file overlaid with environment variables.
///
/// 1. **File**: when `path` is given it must exist; its format is inferred from the extension.
/// 2. **Environment**: variables prefixed with `PRCTX__`, nested with double underscores
///    (`PRCTX__REGISTRY__ALLOWED_PREFIXES` maps to `registry.allowed_prefixes`).
///
/// Missing values fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// sources do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use prctx_kernel::config::load_config;
/// use prctx_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.registry.require_namespace);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, environment())
}

/// The `PRCTX__` environment source used by [`load_config`].
///
/// Call [`Environment::source`] on it to read variables from a map instead of the
/// process environment.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("registry.allowed_prefixes")
        .try_parsing(true)
}

/// Like [`load_config`], with an explicit environment source.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = &path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
