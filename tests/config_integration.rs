use laravel_sweeper::config::Config;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[catalog]
data_dir = "/var/lib/laravel-sweeper"
catalog_file = "projects.txt"
last_dir_file = "last.txt"

[scanner]
follow_symlinks = true
max_depth = 6

[launcher]
editor = "phpstorm"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(
        config.catalog.catalog_path(),
        PathBuf::from("/var/lib/laravel-sweeper/projects.txt")
    );
    assert_eq!(
        config.catalog.last_dir_path(),
        PathBuf::from("/var/lib/laravel-sweeper/last.txt")
    );
    assert!(config.scanner.follow_symlinks);
    assert_eq!(config.scanner.max_depth, Some(6));
    assert_eq!(config.launcher.editor, "phpstorm");
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[launcher]
editor = "vim"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert_eq!(config.launcher.editor, "vim");
    // Default values
    assert_eq!(config.catalog.catalog_file, "laravel_projects.txt");
    assert_eq!(config.scanner.max_depth, None);
    assert!(!config.scanner.follow_symlinks);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_invalid_file_name_returns_error() {
    let config_content = r#"
[catalog]
catalog_file = "nested/projects.txt"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/laravel-sweeper.toml")));
    assert!(result.is_err());
}
