use std::io;

/// Errors raised by dictionary operations.
///
/// Looking up, correcting or removing a word that is not in the dictionary
/// is never an error; those report `false` or `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// An empty token was offered for insertion
    #[error("Can not add an empty word to the dictionary")]
    EmptyWord,

    /// Reading a corpus file failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A writer panicked while holding the shared dictionary lock
    #[error("Dictionary lock poisoned: {0}")]
    LockPoisoned(String),
}
