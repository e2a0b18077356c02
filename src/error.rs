use thiserror::Error;

/// Errors surfaced by the vectorizer.
///
/// Both kinds are unrecoverable at this level: callers get the error as-is,
/// with no retries, no fallback rows and no partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolventError {
    /// Selection that would produce an empty feature set.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Solvent name with no entry in the descriptor table.
    #[error("unknown solvent: {0:?}")]
    UnknownSolvent(String),
}
