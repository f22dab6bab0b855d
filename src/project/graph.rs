//! Starter build graph for scaffolded projects.
//!
//! The graph is fully resolved here (rule names, object paths, artifact path)
//! and only then handed to the Ninja writer for serialization.

use crate::config::{Config, MANIFEST_FILE, ProjectType};
use crate::error::Result;
use crate::ninja::{
    BuildEdge, Rule, UndefinedVariables, VariableScope, Writer, escape, expand_with,
};
use std::path::Path;
use tracing::debug;

/// Oldest Ninja release that understands `deps = gcc`.
const NINJA_REQUIRED_VERSION: &str = "1.3";

/// Globals, rules and edges of one build file, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildGraph {
    pub variables: VariableScope,
    pub rules: Vec<Rule>,
    pub edges: Vec<BuildEdge>,
    pub defaults: Vec<String>,
}

impl BuildGraph {
    /// Command line of every edge, as Ninja will evaluate it.
    ///
    /// Bindings are evaluated when declared: each global sees the globals
    /// above it, and edge variables see the globals. The rule's command is then
    /// expanded in the edge's scope, which adds `$in` and `$out`. Edges whose
    /// rule is not declared in the graph (such as `phony`) have no command.
    pub fn resolved_commands(&self, policy: UndefinedVariables) -> Result<Vec<String>> {
        let no_locals = VariableScope::new();
        let mut globals = VariableScope::new();
        for (name, value) in self.variables.iter() {
            let value = expand_with(value, &globals, &no_locals, policy)?;
            globals.insert(name, value);
        }

        let mut commands = Vec::new();
        for edge in &self.edges {
            let Some(rule) = self.rules.iter().find(|r| r.name == edge.rule) else {
                continue;
            };

            let mut scope = VariableScope::new();
            for (name, value) in edge.variables.iter() {
                scope.insert(name, expand_with(value, &globals, &no_locals, policy)?);
            }
            scope.insert("in", edge.inputs.join(" "));
            scope.insert("out", edge.outputs.join(" "));

            commands.push(expand_with(&rule.command, &globals, &scope, policy)?);
        }
        Ok(commands)
    }
}

fn object_path(build_dir: &str, source: &str) -> String {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(source);
    format!("{build_dir}/obj/{stem}.o")
}

fn artifact_path(build_dir: &str, config: &Config) -> String {
    match config.project_type {
        ProjectType::Bin => format!("{build_dir}/{}", config.name),
        ProjectType::Lib => format!("{build_dir}/lib{}.a", config.name),
    }
}

/// Build the starter graph for `config` over the given `sources`.
///
/// `sources` are paths relative to the project root, in the order they should
/// be compiled.
pub fn starter_graph(config: &Config, sources: &[String]) -> Result<BuildGraph> {
    // Already shell-quoted; reject it here rather than in the generated command.
    config.cxxflags_list()?;

    let mut variables = VariableScope::new();
    variables.insert("ninja_required_version", NINJA_REQUIRED_VERSION);
    variables.insert("builddir", escape(&config.build_dir)?);
    variables.insert("cxx", escape(&config.cxx)?);
    variables.insert("cxxflags", escape(&config.cxxflags)?);
    variables.insert("includes", "-Iinclude");

    let mut rules = vec![
        Rule::new("cxx", "$cxx -MMD -MF $out.d $cxxflags $includes -c $in -o $out")
            .description("CXX $out")
            .depfile("$out.d")
            .deps("gcc"),
    ];
    rules.push(match config.project_type {
        ProjectType::Bin => Rule::new("link", "$cxx $in -o $out").description("LINK $out"),
        ProjectType::Lib => {
            Rule::new("ar", "rm -f $out && ar crs $out $in").description("AR $out")
        }
    });
    rules.push(
        Rule::new("regenerate", "ninjagen generate")
            .description("Regenerating $out")
            .generator(),
    );

    let build_dir = config.build_dir.trim_end_matches('/');
    let mut edges = Vec::new();
    let mut objects = Vec::new();
    for source in sources {
        let object = object_path(build_dir, source);
        edges.push(BuildEdge::new([object.as_str()], "cxx").inputs([source.as_str()]));
        objects.push(object);
    }

    let artifact = artifact_path(build_dir, config);
    let link_rule = match config.project_type {
        ProjectType::Bin => "link",
        ProjectType::Lib => "ar",
    };
    edges.push(BuildEdge::new([artifact.as_str()], link_rule).inputs(objects));
    edges.push(
        BuildEdge::new([config.build_file.as_str()], "regenerate")
            .inputs([MANIFEST_FILE])
            .pool("console"),
    );

    debug!(
        name = %config.name,
        sources = sources.len(),
        edges = edges.len(),
        "built starter graph"
    );

    Ok(BuildGraph {
        variables,
        rules,
        edges,
        defaults: vec![artifact],
    })
}

/// Serialize `graph` as a complete Ninja file.
pub fn render(graph: &BuildGraph, width: usize) -> Result<String> {
    let mut writer = Writer::with_width(String::new(), width)?;

    writer.comment(&format!(
        "This file is generated by ninjagen from {MANIFEST_FILE}. Do not edit by hand."
    ))?;
    writer.newline()?;

    for (name, value) in graph.variables.iter() {
        writer.variable(name, value, 0)?;
    }
    writer.newline()?;

    for rule in &graph.rules {
        writer.rule(rule)?;
        writer.newline()?;
    }

    for edge in &graph.edges {
        writer.build(edge)?;
    }
    writer.newline()?;

    writer.default(&graph.defaults)?;
    Ok(writer.into_inner())
}
