use std::fmt;

// === StorageError ===

/// Errors related to the local key-value storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// The backing store could not be read or written.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === HistoryError ===

/// Errors related to recently-viewed history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// A visit was recorded with an empty title.
    EmptyTitle,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::EmptyTitle => write!(f, "Visit title must not be empty"),
        }
    }
}

impl std::error::Error for HistoryError {}
