//! C16: Dependency Manifest Reader. A trivial, separately-invoked helper
//! that mirrors the reference implementation's `parse_dependencies`
//! (§4.13). Never called by `analyze_project` itself — the CLI wires its
//! output into `ProjectReport.external_dependencies` after the fact.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::constants::REQUIREMENTS_FILENAME;

/// Reads `requirements.txt` from `project_root`, if present, and returns
/// package names with version specifiers stripped. I/O errors yield an
/// empty list rather than propagating.
#[must_use]
pub fn read_dependencies(project_root: &Path) -> Vec<String> {
    let path = project_root.join(REQUIREMENTS_FILENAME);
    let Ok(content) = fs::read_to_string(&path) else {
        return Vec::new();
    };

    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if line.starts_with("-e ") || line.starts_with("--editable ") {
        return None;
    }
    if line.starts_with("git+") || line.starts_with("http") {
        let egg_part = line.split("#egg=").nth(1)?;
        let package_name = egg_part.split(['&', '[']).next()?;
        return (!package_name.is_empty()).then(|| package_name.to_string());
    }

    package_name_pattern()
        .find(line)
        .map(|m| m.as_str().to_string())
}

fn package_name_pattern() -> &'static Regex {
    static PATTERN: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.-]+").expect("valid regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dependencies_of(content: &str) -> Vec<String> {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(REQUIREMENTS_FILENAME), content).expect("write requirements");
        read_dependencies(dir.path())
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let dir = tempdir().expect("tempdir");
        assert!(read_dependencies(dir.path()).is_empty());
    }

    #[test]
    fn strips_version_specifiers() {
        let deps = dependencies_of("flask==2.0.1\nrequests>=2.26\n");
        assert_eq!(deps, vec!["flask", "requests"]);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let deps = dependencies_of("\n# a comment\nflask==2.0.1\n");
        assert_eq!(deps, vec!["flask"]);
    }

    #[test]
    fn skips_editable_installs() {
        let deps = dependencies_of("-e .\n--editable ./local-pkg\nflask\n");
        assert_eq!(deps, vec!["flask"]);
    }

    #[test]
    fn extracts_egg_fragment_from_url_installs() {
        let deps = dependencies_of("git+https://github.com/a/b.git#egg=mypkg&subdirectory=foo\n");
        assert_eq!(deps, vec!["mypkg"]);
    }
}
