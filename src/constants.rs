//! Hard-coded policy values shared across the walker, resolver, and config
//! loader (§4.1, §4.11).

/// Directory names that are never descended into, regardless of config.
pub const PRUNED_DIRECTORY_NAMES: &[&str] = &["__pycache__", "node_modules", "venv", "env"];

/// The name the init segment of a package carries (elided from module names).
pub const PACKAGE_INIT_STEM: &str = "__init__";

/// Tool-specific configuration filename, checked before `pyproject.toml`.
pub const CONFIG_FILENAME: &str = "pysource-metrics.toml";

/// Fallback configuration file: a `[tool.pysource_metrics]` table inside it.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Manifest file read by the (optional, separately-invoked) dependency reader.
pub const REQUIREMENTS_FILENAME: &str = "requirements.txt";

/// Returns whether a directory name should be pruned from the walk: it
/// begins with `.` or matches one of the hard-coded non-source names.
#[must_use]
pub fn is_pruned_directory(name: &str) -> bool {
    name.starts_with('.') || PRUNED_DIRECTORY_NAMES.contains(&name)
}
