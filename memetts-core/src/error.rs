//! Error types for the segmentation core

use crate::sequence::SequenceKind;
use thiserror::Error;

/// Errors raised while building or querying a prefix tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The empty phrase would make the root terminal (zero-length matches)
    #[error("empty phrase cannot be stored")]
    EmptyPhrase,

    /// Phrases of different kinds were mixed in one tree
    #[error("sequence kind mismatch: tree stores {expected} phrases, got {found}")]
    SequenceKindMismatch {
        /// Kind established by the first phrase
        expected: SequenceKind,
        /// Kind of the offending phrase
        found: SequenceKind,
    },

    /// A value is neither concatenable text nor an appendable token list
    #[error("unsupported sequence kind: {0}")]
    UnsupportedSequenceKind(String),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting is out of range
    #[error("Configuration error: {0}")]
    Invalid(String),
}

/// Top-level error for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Prefix tree error
    #[error(transparent)]
    Trie(#[from] TrieError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
