use prctx_kernel::config::{environment, load_config, load_config_with};
use prctx_kernel::domain::config::AppConfig;
use std::fs;
use tempfile::tempdir;

fn no_env() -> config::Environment {
    environment().source(Some(Default::default()))
}

#[test]
fn defaults_without_sources() {
    let cfg: AppConfig = load_config_with(None::<&str>, no_env()).expect("load defaults");
    assert!(cfg.registry.require_namespace);
    assert!(cfg.registry.allowed_prefixes.is_empty());
}

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("prctx.json");
    fs::write(
        &path,
        r#"{ "registry": { "require_namespace": false, "allowed_prefixes": ["org.prctx."] } }"#,
    )?;

    let cfg: AppConfig = load_config_with(Some(&path), no_env())?;
    assert!(!cfg.registry.require_namespace);
    assert_eq!(cfg.registry.allowed_prefixes, ["org.prctx."]);
    Ok(())
}

#[test]
fn toml_files_are_supported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("prctx.toml");
    fs::write(&path, "[registry]\nallowed_prefixes = [\"com.acme.\"]\n")?;

    let cfg: AppConfig = load_config_with(Some(&path), no_env())?;
    assert!(cfg.registry.require_namespace);
    assert_eq!(cfg.registry.allowed_prefixes, ["com.acme."]);
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let result = load_config::<AppConfig>(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}
