use serde::Deserialize;

/// Top-level configuration, loaded once at startup.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub registry: RegistryConfig,
}

/// Rules applied to key identifiers when the registry is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Require `<domain>.<subsystem>.<purpose>` style identifiers (at least two segments).
    pub require_namespace: bool,
    /// When non-empty, every identifier must start with one of these prefixes.
    /// Empty entries never match.
    pub allowed_prefixes: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { require_namespace: true, allowed_prefixes: Vec::new() }
    }
}

impl RegistryConfig {
    /// Returns `true` if `id` passes the prefix allow-list.
    #[must_use]
    pub fn is_prefix_allowed(&self, id: &str) -> bool {
        self.allowed_prefixes.is_empty()
            || self
                .allowed_prefixes
                .iter()
                .any(|prefix| !prefix.is_empty() && id.starts_with(prefix.as_str()))
    }

    /// Returns `true` if the allow-list contains an empty entry.
    #[must_use]
    pub fn has_empty_prefix(&self) -> bool {
        self.allowed_prefixes.iter().any(String::is_empty)
    }
}
