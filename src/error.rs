//! Error taxonomy shared by the readers and the GA engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a problem or running the GA.
#[derive(Debug, Error)]
pub enum TspError {
    /// A file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A header field is missing or unparseable, or section data is short.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The initial population file holds no well-formed tour.
    #[error("initial population contains no valid tour")]
    EmptyPopulation,

    /// A tour is not a permutation of `0..size`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// A PMX cut point outside `0..size - 1`.
    #[error("cut point {cut} out of range for {size} cities")]
    CutPointOutOfRange { cut: usize, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub fn invalid_permutation(message: impl Into<String>) -> Self {
        Self::InvalidPermutation(message.into())
    }
}
