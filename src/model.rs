//! The report data model (§3 of the spec).
//!
//! Every entity here is a plain, serialisable record assembled during a
//! single analysis pass; none of it is mutated after construction.

use serde::Serialize;

/// A discovered source file, identified three ways: its absolute path on
/// disk, its path relative to the project root, and the dotted module name
/// the import resolver binds references against.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    pub absolute_path: String,
    pub project_relative_path: String,
    pub module_name: String,
}

/// One function, async function, or method definition.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionReport {
    pub name: String,
    pub line_number: usize,
    pub cyclomatic: usize,
    pub cognitive: usize,
}

/// Halstead software-science measures for one file (§4.6).
#[derive(Debug, Clone, Serialize)]
pub struct HalsteadReport {
    pub h1: usize,
    #[serde(rename = "h2")]
    pub h2: usize,
    #[serde(rename = "N1")]
    pub n1: usize,
    #[serde(rename = "N2")]
    pub n2: usize,
    pub vocabulary: usize,
    pub length: usize,
    pub volume: f64,
    pub difficulty: f64,
    pub effort: f64,
    pub time: f64,
    pub bugs: f64,
}

impl Default for HalsteadReport {
    fn default() -> Self {
        Self {
            h1: 0,
            h2: 0,
            n1: 0,
            n2: 0,
            vocabulary: 0,
            length: 0,
            volume: 0.0,
            difficulty: 0.0,
            effort: 0.0,
            time: 0.0,
            bugs: 0.0,
        }
    }
}

/// The kind of syntactic anti-pattern a `Smell` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum SmellKind {
    LongParameterList,
    MagicNumber,
    SyntaxError,
}

#[derive(Debug, Clone, Serialize)]
pub struct Smell {
    pub kind: SmellKind,
    pub message: String,
    pub line_number: usize,
}

/// A single `import`/`from ... import ...` reference, recorded exactly as it
/// appeared lexically. Resolution to a concrete file happens later, in the
/// graph resolver.
pub type ImportRef = String;

/// The full analysis of one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: SourceFile,
    pub loc: usize,
    pub functions: Vec<FunctionReport>,
    pub smells: Vec<Smell>,
    pub halstead: HalsteadReport,
    pub imports: Vec<ImportRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Builds the zero-valued report emitted when a file could not be read
    /// at all (C1 failure): every metric is empty, `error` is set.
    pub fn io_error(source: SourceFile, message: String) -> Self {
        Self {
            source,
            loc: 0,
            functions: Vec::new(),
            smells: Vec::new(),
            halstead: HalsteadReport::default(),
            imports: Vec::new(),
            error: Some(message),
        }
    }
}

/// One node in the inter-file import graph, keyed by `project_relative_path`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub path: String,
}

/// A directed, deduplicated edge between two graph nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// The final, aggregated report for one `analyze_project` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub files_analyzed: usize,
    pub total_loc: usize,
    pub total_functions: usize,
    pub total_smells: usize,
    pub total_cyclomatic: usize,
    pub total_cognitive: usize,
    pub avg_cyclomatic: f64,
    pub avg_cognitive: f64,
    pub total_halstead_volume: f64,
    pub total_halstead_difficulty: f64,
    pub total_halstead_effort: f64,
    pub avg_halstead_volume: f64,
    pub avg_halstead_difficulty: f64,
    pub avg_halstead_effort: f64,
    pub external_dependencies: Vec<String>,
    pub files: Vec<FileReport>,
    pub graph: ImportGraph,
}
