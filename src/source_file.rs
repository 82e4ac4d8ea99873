//! Derivation of `SourceFile` records (§3: `module_name`).

use std::path::Path;

use crate::constants::PACKAGE_INIT_STEM;
use crate::model::SourceFile;

/// The extension the target language's source files carry.
pub const SOURCE_EXTENSION: &str = "py";

pub fn build(absolute_path: &Path, project_relative_path: &str) -> SourceFile {
    SourceFile {
        absolute_path: absolute_path.to_string_lossy().into_owned(),
        project_relative_path: project_relative_path.to_owned(),
        module_name: module_name_from_relative_path(project_relative_path),
    }
}

/// Replaces path separators with dots and strips the source extension; a
/// trailing `__init__` segment is elided so package roots resolve to their
/// own directory name rather than `pkg.__init__`.
pub fn module_name_from_relative_path(relative_path: &str) -> String {
    let normalized = relative_path.replace('\\', "/");
    let without_ext = normalized
        .strip_suffix(&format!(".{SOURCE_EXTENSION}"))
        .unwrap_or(&normalized);

    let mut segments: Vec<&str> = without_ext.split('/').filter(|s| !s.is_empty()).collect();
    if segments.last() == Some(&PACKAGE_INIT_STEM) {
        segments.pop();
    }
    segments.join(".")
}
