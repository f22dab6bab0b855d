//! Tests for project scaffolding and generation.

use super::*;
use crate::config::ProjectType;
use crate::ninja::UndefinedVariables;
use tempfile::TempDir;

#[test]
fn test_scaffold_bin_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("hello");
    let config = Config::for_project("hello", ProjectType::Bin);

    let generated = scaffold(&root, &config).unwrap();

    assert!(root.join(MANIFEST_FILE).exists());
    assert!(root.join(".gitignore").exists());
    assert!(root.join("src/main.cpp").exists());
    assert_eq!(generated.build_file, root.join("build.ninja"));
    assert_eq!(generated.sources, vec!["src/main.cpp"]);
    assert_eq!(generated.targets, vec!["build/hello"]);

    let ninja = fs::read_to_string(root.join("build.ninja")).unwrap();
    assert!(ninja.contains("build build/obj/main.o: cxx src/main.cpp\n"));
    assert!(ninja.contains("default build/hello\n"));
}

#[test]
fn test_scaffold_lib_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("widget");
    let config = Config::for_project("widget", ProjectType::Lib);

    let generated = scaffold(&root, &config).unwrap();

    assert!(root.join("include/widget/widget.hpp").exists());
    assert!(root.join("src/widget.cpp").exists());
    assert_eq!(generated.targets, vec!["build/libwidget.a"]);
}

#[test]
fn test_scaffold_writes_loadable_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::for_project("roundtrip", ProjectType::Lib);

    scaffold(temp_dir.path(), &config).unwrap();

    let loaded = Config::load(temp_dir.path().join(MANIFEST_FILE)).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_scaffold_keeps_existing_sources() {
    let temp_dir = TempDir::new().unwrap();
    let main = temp_dir.path().join("src/main.cpp");
    fs::create_dir_all(main.parent().unwrap()).unwrap();
    fs::write(&main, "int main() { return 7; }\n").unwrap();

    scaffold(temp_dir.path(), &Config::for_project("keep", ProjectType::Bin)).unwrap();

    assert_eq!(
        fs::read_to_string(&main).unwrap(),
        "int main() { return 7; }\n"
    );
}

#[test]
fn test_scaffold_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::for_project("bad name", ProjectType::Bin);

    let err = scaffold(temp_dir.path(), &config).unwrap_err();

    assert!(matches!(err, NinjagenError::ConfigError(_)));
    assert!(!temp_dir.path().join(MANIFEST_FILE).exists());
}

#[test]
fn test_discover_sources_sorted_cpp_only() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    for name in ["zeta.cpp", "alpha.cpp", "notes.txt", "util.hpp"] {
        fs::write(src.join(name), "").unwrap();
    }

    let sources = discover_sources(temp_dir.path()).unwrap();
    assert_eq!(sources, vec!["src/alpha.cpp", "src/zeta.cpp"]);
}

#[test]
fn test_discover_sources_without_src_dir() {
    let temp_dir = TempDir::new().unwrap();
    assert!(discover_sources(temp_dir.path()).unwrap().is_empty());
}

#[test]
fn test_generate_picks_up_new_sources() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::for_project("grow", ProjectType::Bin);
    scaffold(temp_dir.path(), &config).unwrap();

    fs::write(temp_dir.path().join("src/extra.cpp"), "").unwrap();
    let generated = generate(temp_dir.path(), &config).unwrap();

    assert_eq!(generated.sources, vec!["src/extra.cpp", "src/main.cpp"]);
    let ninja = fs::read_to_string(&generated.build_file).unwrap();
    assert!(ninja.contains("build build/obj/extra.o: cxx src/extra.cpp\n"));
}

#[test]
fn test_generate_honours_line_width() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::for_project("narrow", ProjectType::Bin);
    config.line_width = 30;
    scaffold(temp_dir.path(), &config).unwrap();

    let ninja = fs::read_to_string(temp_dir.path().join("build.ninja")).unwrap();
    assert!(ninja.contains(" $\n"));
}

#[test]
fn test_generate_uses_custom_build_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::for_project("custom", ProjectType::Bin);
    config.build_file = "out.ninja".to_string();
    config.undefined_variables = UndefinedVariables::Error;

    let generated = scaffold(temp_dir.path(), &config).unwrap();

    assert_eq!(generated.build_file, temp_dir.path().join("out.ninja"));
    let ninja = fs::read_to_string(&generated.build_file).unwrap();
    assert!(ninja.contains("build out.ninja: regenerate ninjagen.yaml\n"));
}

#[test]
fn test_generate_reports_literal_build_dir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::for_project("app", ProjectType::Bin);
    config.build_dir = "my$dir".to_string();

    let generated = scaffold(temp_dir.path(), &config).unwrap();

    assert_eq!(generated.targets, vec!["my$dir/app"]);
    let ninja = fs::read_to_string(&generated.build_file).unwrap();
    assert!(ninja.contains("default my$$dir/app\n"));
}
