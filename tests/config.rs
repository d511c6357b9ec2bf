//! Tests for config loading and the bare-numeral policy switch.

use std::fs;
use std::io::Write;
use unitval::{Config, Registry};

#[test]
fn defaults_when_file_is_missing() {
    let config = Config::load_from(std::path::Path::new("/nonexistent/unitval.toml")).unwrap();
    assert!(config.conversion.allow_bare_number);
    assert_eq!(config.shell.prompt, "unitval> ");
}

#[test]
fn empty_file_yields_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"").unwrap();
    let config = Config::load_from(file.path()).unwrap();
    assert!(config.conversion.allow_bare_number);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unitval.toml");
    fs::write(&path, "[conversion]\nallow_bare_number = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(!config.conversion.allow_bare_number);
    assert_eq!(config.shell.prompt, "unitval> ");
}

#[test]
fn config_drives_registry_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unitval.toml");
    fs::write(&path, "[conversion]\nallow_bare_number = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    let registry = Registry::from_config(&config);
    assert_eq!(registry.convert("200", "storage-size"), None);
    assert_eq!(registry.convert("200B", "storage-size"), Some(200.0));

    let permissive = Registry::from_config(&Config::default());
    assert_eq!(permissive.convert("200", "storage-size"), Some(200.0));
}

#[test]
fn syntax_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unitval.toml");
    fs::write(&path, "[conversion\nallow_bare_number = maybe").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn tilde_expansion() {
    let expanded = Config::expand_path("~/unitval.toml");
    assert!(!expanded.to_string_lossy().starts_with('~'));
    assert_eq!(
        Config::expand_path("/etc/unitval.toml"),
        std::path::PathBuf::from("/etc/unitval.toml")
    );
}
