use thiserror::Error;

/// Failures reported by [`ArrayList`](crate::list::ArrayList) operations.
///
/// Every failing operation leaves the list exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} out of range for list of size {size}")]
    OutOfRange { index: i64, size: usize },

    #[error("cannot store an absent value")]
    InvalidArgument,

    #[error("list is empty")]
    EmptyContainer,
}

impl ListError {
    /// Build an `OutOfRange` error from an unsigned index
    pub fn out_of_range(index: usize, size: usize) -> Self {
        ListError::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            size,
        }
    }
}

#[derive(Error, Debug)]
pub enum ArrlistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid command: {message}")]
    InvalidCommand { line: usize, message: String },

    #[error("line {line}: {source}")]
    Operation {
        line: usize,
        #[source]
        source: ListError,
    },
}

pub type Result<T> = std::result::Result<T, ArrlistError>;
