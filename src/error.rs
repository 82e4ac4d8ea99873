use std::fmt;
use std::path::PathBuf;

/// Engine-fatal failures, per the error-tier design: only the root-path
/// preconditions can abort `analyze_project` outright. Everything else is
/// folded into a `FileReport.error`.
#[derive(Debug)]
pub enum EngineError {
    /// The project root does not exist.
    PathNotFound(PathBuf),
    /// The project root exists but is not a directory.
    NotADirectory(PathBuf),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound(path) => {
                write!(f, "project path does not exist: {}", path.display())
            }
            Self::NotADirectory(path) => {
                write!(f, "project path is not a directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for EngineError {}
