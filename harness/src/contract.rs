//! Harness-side contract for graph families: loading errors and summaries.

use std::path::Path;

use rand::RngCore;

/// Typed failure for building or loading a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The graph file could not be read.
    Io { path: String, detail: String },
    /// A line of the graph description is malformed (1-based line number).
    Malformed { line: usize, detail: String },
    /// A construction argument is out of range.
    InvalidArgument { detail: String },
}

impl LoadError {
    pub(crate) fn malformed(line: usize, detail: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read {path}: {detail}"),
            Self::Malformed { line, detail } => write!(f, "line {line}: {detail}"),
            Self::InvalidArgument { detail } => write!(f, "invalid argument: {detail}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Read a whole graph description file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}

/// Non-comment, non-blank lines of a text description, trimmed, with their
/// 1-based line numbers.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Human-readable description of a graph for the interactive driver.
pub trait GraphSummary {
    /// A multi-line summary: size, shape, and a few random vertices with
    /// their outgoing edges.
    fn summary(&self, rng: &mut dyn RngCore) -> String;
}
