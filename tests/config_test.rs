// tests/config_test.rs
use git_easyrelease::config::{load_config, Config, LOCAL_CONFIG_FILE};
use git_easyrelease::EasyReleaseError;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[release]
prefix = "rel-"
default_options = ["--showcommands"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.release.prefix, "rel-");
    assert_eq!(config.release.default_options, vec!["--showcommands"]);
}

#[test]
fn test_missing_release_table_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"# nothing configured\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[release\nprefix = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, EasyReleaseError::Config(_)));
}

#[test]
fn test_explicit_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
    assert!(matches!(err, EasyReleaseError::Io(_)));
}

#[test]
#[serial]
fn test_local_file_discovered_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[release]\nprefix = \"rc/\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().release.prefix, "rc/");
}
