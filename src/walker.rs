//! C10: Project Walker. Enumerates source files under a root, hands each
//! to the file analyser, and accumulates the raw `FileReport` list (§4.1).
//!
//! File discovery runs over `ignore::WalkBuilder`, the same gitignore-aware
//! walker ripgrep-style tools use, with the hard-coded pruning policy of
//! §4.1 layered underneath whatever `.gitignore` the project itself
//! carries. Per-file analysis (C9) is pure and independent, so once the
//! file list is collected in a stable order it is mapped across a
//! work-stealing pool; the graph resolver that follows stays strictly
//! sequential (§5).

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::constants::is_pruned_directory;
use crate::file_analyzer::analyze_file;
use crate::model::FileReport;
use crate::source_file::SOURCE_EXTENSION;

/// Discovers every target-language source file under `root` and returns
/// their `FileReport`s in a stable, run-to-run reproducible order.
#[must_use]
pub fn walk_project(root: &Path, extra_excludes: &[String]) -> Vec<FileReport> {
    let files = discover_files(root, extra_excludes);
    tracing::info!(count = files.len(), "discovered source files");

    files
        .par_iter()
        .map(|(absolute, relative)| analyze_file(absolute, relative))
        .collect()
}

/// Walks `root` collecting `(absolute_path, project_relative_path)` pairs
/// for every file with the target language's extension, pruning
/// directories per §4.1. `extra_excludes` are additional directory names
/// merged with the hard-coded policy (§4.11).
fn discover_files(root: &Path, extra_excludes: &[String]) -> Vec<(PathBuf, String)> {
    let extra_excludes = extra_excludes.to_vec();
    let mut walker = WalkBuilder::new(root);
    walker
        .standard_filters(true)
        .hidden(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            match entry.file_name().to_str() {
                Some(name) => !is_pruned_directory(name) && !extra_excludes.iter().any(|e| e == name),
                None => true,
            }
        });

    let mut found = Vec::new();
    for entry in walker.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "directory walk entry failed");
                continue;
            }
        };

        if entry.file_type().is_some_and(|ft| !ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        found.push((path.to_path_buf(), relative));
    }

    found.sort_by(|a, b| a.1.cmp(&b.1));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn discovers_python_files_and_prunes_pycache() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("a.py"), "x = 1\n").expect("write a.py");
        fs::create_dir(dir.path().join("__pycache__")).expect("mkdir");
        fs::write(dir.path().join("__pycache__/a.cpython.py"), "x = 1\n").expect("write cache");

        let reports = walk_project(dir.path(), &[]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].source.project_relative_path, "a.py");
    }

    #[test]
    fn prunes_dot_directories() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir(dir.path().join(".hidden")).expect("mkdir");
        fs::write(dir.path().join(".hidden/a.py"), "x = 1\n").expect("write");
        fs::write(dir.path().join("b.py"), "x = 1\n").expect("write");

        let reports = walk_project(dir.path(), &[]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].source.project_relative_path, "b.py");
    }

    #[test]
    fn honours_extra_excludes_from_config() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("vendor")).expect("mkdir");
        fs::write(dir.path().join("vendor/a.py"), "x = 1\n").expect("write");
        fs::write(dir.path().join("b.py"), "x = 1\n").expect("write");

        let reports = walk_project(dir.path(), &["vendor".to_string()]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].source.project_relative_path, "b.py");
    }
}
