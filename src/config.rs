//! C13: Config Loader. Discovers an optional project-local settings file,
//! walking parent directories the same way the teacher's own config layer
//! does (§4.11).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

/// The `[tool.pysource_metrics]` section of a `pysource-metrics.toml` or a
/// `pyproject.toml`. Absence of either file yields `Config::default()`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub pysource_metrics: ToolConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ToolConfig {
    /// Additional directory names to prune, merged with the hard-coded
    /// pruning policy of §4.1 (never replacing it).
    #[serde(default)]
    pub exclude_folders: Vec<String>,
    /// Accepted for forward compatibility with the front-end's filtering
    /// UI; the engine does not special-case test paths (§4.11, DESIGN.md).
    #[serde(default)]
    pub include_tests: bool,
}

#[derive(Debug, Deserialize, Default)]
struct PyProject {
    #[serde(default)]
    tool: PyProjectTool,
}

#[derive(Debug, Deserialize, Default)]
struct PyProjectTool {
    #[serde(default, rename = "pysource_metrics")]
    pysource_metrics: ToolConfig,
}

impl Config {
    /// Loads configuration starting from `path`, walking up parent
    /// directories until a recognised file is found or the filesystem
    /// root is reached. Absence of any file is not an error.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = if path.is_file() {
            path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        } else {
            path.to_path_buf()
        };

        loop {
            let tool_toml = current.join(CONFIG_FILENAME);
            if let Some(config) = read_tool_config(&tool_toml) {
                tracing::debug!(path = %tool_toml.display(), "loaded config");
                return config;
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if let Some(config) = read_pyproject_config(&pyproject_toml) {
                tracing::debug!(path = %pyproject_toml.display(), "loaded config from pyproject.toml");
                return config;
            }

            if !current.pop() {
                break;
            }
        }

        Self::default()
    }
}

/// Reads and parses `path` as a tool-specific config file. Internal
/// helper: any of "missing", "unreadable", "malformed TOML" collapses to
/// `None` at the call site, so the uninteresting failure detail only
/// needs to survive as far as this function's own `anyhow::Result`.
fn read_tool_config(path: &Path) -> Option<Config> {
    try_read_tool_config(path).ok()
}

fn try_read_tool_config(path: &Path) -> anyhow::Result<Config> {
    anyhow::ensure!(path.exists(), "no config file at {}", path.display());
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

fn read_pyproject_config(path: &Path) -> Option<Config> {
    try_read_pyproject_config(path).ok()
}

fn try_read_pyproject_config(path: &Path) -> anyhow::Result<Config> {
    anyhow::ensure!(path.exists(), "no pyproject.toml at {}", path.display());
    let content = fs::read_to_string(path)?;
    let pyproject: PyProject = toml::from_str(&content)?;
    Ok(Config {
        pysource_metrics: pyproject.tool.pysource_metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = Config::load_from_path(dir.path());
        assert!(config.pysource_metrics.exclude_folders.is_empty());
        assert!(!config.pysource_metrics.include_tests);
    }

    #[test]
    fn tool_specific_toml_takes_precedence_over_pyproject() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[pysource_metrics]\nexclude_folders = [\"vendor\"]\n",
        )
        .expect("write config");
        fs::write(
            dir.path().join(PYPROJECT_FILENAME),
            "[tool.pysource_metrics]\nexclude_folders = [\"other\"]\n",
        )
        .expect("write pyproject");

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.pysource_metrics.exclude_folders, vec!["vendor".to_string()]);
    }

    #[test]
    fn falls_back_to_pyproject_table() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(PYPROJECT_FILENAME),
            "[tool.pysource_metrics]\ninclude_tests = true\n",
        )
        .expect("write pyproject");

        let config = Config::load_from_path(dir.path());
        assert!(config.pysource_metrics.include_tests);
    }

    #[test]
    fn walks_up_parent_directories() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[pysource_metrics]\nexclude_folders = [\"vendor\"]\n",
        )
        .expect("write config");
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).expect("mkdir");

        let config = Config::load_from_path(&nested);
        assert_eq!(config.pysource_metrics.exclude_folders, vec!["vendor".to_string()]);
    }
}
