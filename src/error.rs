use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A letter sequence contained something other than a letter
    #[error("you entered an invalid character {found:?}; only letters can be accepted")]
    InvalidCharacter { found: char },

    /// An empty letter sequence reached the command line
    #[error("no letters provided, cannot compute any words")]
    NoLetters,

    /// Exhaustive permutation of this many letters would not finish
    #[error("{count} letters exceeds the permutation limit of {limit}")]
    TooManyLetters { count: usize, limit: usize },

    /// The word list file could not be opened or read
    #[error("could not read word list {path:?}: {source}")]
    WordlistRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
