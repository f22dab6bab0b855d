//! Source templates written by `new` and `init`.

use crate::config::ProjectType;

/// Relative path and contents of one scaffolded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: String,
    pub contents: String,
}

impl TemplateFile {
    fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

const MAIN_CPP: &str = r#"#include <iostream>

int main(int argc, char** argv) {
    std::cout << "Hello, world!" << std::endl;
}
"#;

fn library_header(name: &str) -> String {
    format!(
        r#"#pragma once

namespace {name} {{
    int answer();
}}
"#
    )
}

fn library_source(name: &str, namespace: &str) -> String {
    format!(
        r#"#include "{name}/{name}.hpp"

namespace {namespace} {{
    int answer() {{
        return 42;
    }}
}}
"#
    )
}

/// Source files for a new project named `name`.
///
/// Library names may contain `-`, which is not valid in a C++ namespace, so
/// the namespace uses `_` instead.
pub fn source_files(name: &str, project_type: ProjectType) -> Vec<TemplateFile> {
    match project_type {
        ProjectType::Bin => vec![TemplateFile::new("src/main.cpp", MAIN_CPP)],
        ProjectType::Lib => {
            let namespace = name.replace('-', "_");
            vec![
                TemplateFile::new(
                    format!("include/{name}/{name}.hpp"),
                    library_header(&namespace),
                ),
                TemplateFile::new(
                    format!("src/{name}.cpp"),
                    library_source(name, &namespace),
                ),
            ]
        }
    }
}

/// `.gitignore` excluding the build directory.
pub fn gitignore(build_dir: &str) -> String {
    format!("/{}/\n", build_dir.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_project_has_main() {
        let files = source_files("hello", ProjectType::Bin);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "src/main.cpp");
        assert!(files[0].contents.contains("int main"));
    }

    #[test]
    fn lib_project_has_header_and_source() {
        let files = source_files("widget", ProjectType::Lib);
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["include/widget/widget.hpp", "src/widget.cpp"]);
        assert!(files[1].contents.contains("#include \"widget/widget.hpp\""));
    }

    #[test]
    fn dashed_lib_name_uses_valid_namespace() {
        let files = source_files("my-lib", ProjectType::Lib);
        assert!(files[0].contents.contains("namespace my_lib {"));
        assert!(files[1].contents.contains("namespace my_lib {"));
        assert!(files[1].contents.contains("#include \"my-lib/my-lib.hpp\""));
    }

    #[test]
    fn gitignore_anchors_build_dir() {
        assert_eq!(gitignore("build"), "/build/\n");
        assert_eq!(gitignore("out/"), "/out/\n");
    }
}
