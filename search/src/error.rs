//! Typed search errors.
//!
//! `SearchError` covers contract violations only. Failing to find a path is
//! not an error: it is reported through [`crate::result::SearchResult`] with
//! `success == false`.

/// Typed failure for the search core and the graph contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `remove_min` or `peek_min` was called on an empty priority queue.
    EmptyQueue,
    /// A graph cannot perform the requested operation (e.g. enumerate an
    /// effectively infinite vertex set).
    UnsupportedOperation { operation: String, detail: String },
    /// A string does not denote a valid vertex of the graph.
    Parse { input: String, detail: String },
    /// A `SearchResult` violates one of its invariants.
    Validation { invariant: String },
    /// A `SearchPolicy` option is out of range.
    InvalidPolicy { detail: String },
}

impl SearchError {
    pub(crate) fn unsupported(operation: &str, detail: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.to_string(),
            detail: detail.into(),
        }
    }

    /// Shorthand for a [`SearchError::Parse`] failure.
    pub fn parse(input: &str, detail: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn validation(invariant: impl Into<String>) -> Self {
        Self::Validation {
            invariant: invariant.into(),
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQueue => write!(f, "priority queue is empty"),
            Self::UnsupportedOperation { operation, detail } => {
                write!(f, "unsupported operation `{operation}`: {detail}")
            }
            Self::Parse { input, detail } => {
                write!(f, "cannot parse vertex {input:?}: {detail}")
            }
            Self::Validation { invariant } => {
                write!(f, "search result violates invariant: {invariant}")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
