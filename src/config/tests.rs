//! Tests for config functionality.

use crate::config::{Config, ProjectType, is_valid_name};
use crate::error::NinjagenError;
use crate::ninja::UndefinedVariables;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.name, "app");
    assert_eq!(config.project_type, ProjectType::Bin);
    assert_eq!(config.line_width, 78);
    assert_eq!(config.build_file, "build.ninja");
    assert_eq!(config.build_dir, "build");
    assert_eq!(config.undefined_variables, UndefinedVariables::Empty);
    assert_eq!(config.cxx, "c++");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
name: hello
project_type: lib
line_width: 100
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.name, "hello");
    assert_eq!(config.project_type, ProjectType::Lib);
    assert_eq!(config.line_width, 100);

    // Unspecified values should use defaults
    assert_eq!(config.build_file, "build.ninja");
    assert_eq!(config.cxx, "c++");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
name: engine
project_type: bin
line_width: 120
build_file: out.ninja
build_dir: target
undefined_variables: error
cxx: clang++
cxxflags: "-O2 -DNAME='a b'"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.name, "engine");
    assert_eq!(config.build_file, "out.ninja");
    assert_eq!(config.build_dir, "target");
    assert_eq!(config.undefined_variables, UndefinedVariables::Error);
    assert_eq!(config.cxx, "clang++");
    assert_eq!(
        config.cxxflags_list().unwrap(),
        vec!["-O2".to_string(), "-DNAME=a b".to_string()]
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
name: hello
future_setting: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.name, "hello");
}

#[test]
fn test_roundtrip_through_yaml() {
    let config = Config::for_project("widget", ProjectType::Lib);
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_validation_rejects_small_width() {
    let err = Config::from_yaml("line_width: 2").unwrap_err();
    assert!(matches!(err, NinjagenError::ConfigError(_)));
    assert!(err.to_string().contains("line_width"));
}

#[test]
fn test_validation_rejects_bad_name() {
    let err = Config::from_yaml("name: 9lives").unwrap_err();
    assert!(err.to_string().contains("9lives"));
}

#[test]
fn test_validation_rejects_unbalanced_quotes() {
    let err = Config::from_yaml("cxxflags: \"-DX='oops\"").unwrap_err();
    assert!(err.to_string().contains("cxxflags"));
}

#[test]
fn test_validation_rejects_empty_build_file() {
    let err = Config::from_yaml("build_file: ''").unwrap_err();
    assert!(err.to_string().contains("build_file"));
}

#[test]
fn test_invalid_enum_value() {
    let err = Config::from_yaml("undefined_variables: ignore").unwrap_err();
    assert!(matches!(err, NinjagenError::ConfigError(_)));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ninjagen.yaml");
    std::fs::write(&path, "name: loaded\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.name, "loaded");
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, NinjagenError::ConfigError(_)));
}

#[test]
fn test_name_validation() {
    assert!(is_valid_name("hello"));
    assert!(is_valid_name("_private-lib2"));
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("1abc"));
    assert!(!is_valid_name("has space"));
}
