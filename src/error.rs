use thiserror::Error;

/// Errors surfaced while building the output tree.
///
/// Both kinds abort the whole parse call. The carried path is the prefix of
/// the submitted path at which the problem was detected, which may be
/// shorter than the path the caller supplied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A path position is already occupied, or requires a different
    /// container kind than what already exists there.
    #[error("conflicting entry at `{path}`")]
    Conflict { path: String },

    /// One array instance received both `[]` (push) and `[n]` (indexed)
    /// writes.
    #[error("array at `{path}` mixes indexed and push addressing")]
    MixedIndexing { path: String },
}

impl Error {
    pub(crate) fn conflict(path: impl Into<String>) -> Self {
        Error::Conflict { path: path.into() }
    }

    pub(crate) fn mixed_indexing(path: impl Into<String>) -> Self {
        Error::MixedIndexing { path: path.into() }
    }

    /// Path prefix at which the conflict was detected.
    pub fn path(&self) -> &str {
        match self {
            Error::Conflict { path } | Error::MixedIndexing { path } => path,
        }
    }
}
