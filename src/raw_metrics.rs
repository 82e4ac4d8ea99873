//! C3: Raw Metrics. Logical lines of code: non-blank after stripping
//! whitespace, not starting with the comment introducer. Triple-quoted
//! docstrings are counted like ordinary source lines, matching the
//! reference tool's behaviour (they are never masked out).

const COMMENT_INTRODUCER: char = '#';

#[must_use]
pub fn count_loc(source: &str) -> usize {
    primary_loc(source)
}

fn primary_loc(source: &str) -> usize {
    source
        .lines()
        .filter(|line| is_logical_line(line))
        .count()
}

/// Fallback counter used when the primary computation is unavailable.
/// Deliberately identical to `primary_loc` today: both are a line-oriented
/// scan, and this path exists so a future primary implementation can
/// degrade safely without changing callers.
#[must_use]
pub fn count_loc_fallback(source: &str) -> usize {
    source
        .lines()
        .filter(|line| is_logical_line(line))
        .count()
}

fn is_logical_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_INTRODUCER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_non_blank_non_comment_lines() {
        let src = "import os\n\n# a comment\nx = 1\n";
        assert_eq!(count_loc(src), 2);
    }

    #[test]
    fn counts_docstrings_as_ordinary_lines() {
        let src = "def f():\n    \"\"\"doc\n    more doc\n    \"\"\"\n    return 1\n";
        assert_eq!(count_loc(src), 5);
    }

    #[test]
    fn empty_source_has_zero_loc() {
        assert_eq!(count_loc(""), 0);
    }
}
