//! C1: Source Reader. Decodes a file path into a text string, reporting
//! I/O and encoding failures without aborting the run they're part of.

use std::fs;
use std::path::Path;

/// Reads a source file as UTF-8 text.
///
/// # Errors
///
/// Returns a human-readable message on I/O failure (missing file,
/// permissions) or invalid-UTF-8 decoding; never panics.
pub fn read_source(path: &Path) -> Result<String, String> {
    let bytes = fs::read(path).map_err(|e| format!("failed to read file: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("failed to decode file as UTF-8: {e}"))
}
