//! Error types for fixture construction and request-path parsing.

/// Errors raised by the fixture components.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The play-by-play sequence was empty at construction time.
    #[error("play-by-play fixture sequence must contain at least one response")]
    EmptySequence,

    /// The cycler cursor pointed outside the fixture sequence.
    #[error("cursor {cursor} out of range for {len} fixtures")]
    CursorOutOfRange {
        /// The offending cursor value.
        cursor: usize,
        /// Number of fixtures in the sequence.
        len: usize,
    },

    /// The request path did not have the shape the provider uses.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Writing the statistics CSV failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the CSV writer failed.
    #[error("csv flush error: {0}")]
    CsvFlush(String),

    /// The rendered CSV was not valid UTF-8.
    #[error("csv output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A request path could not be cut at the provider's fixed offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path is shorter than the fixed prefix and suffix it must carry.
    #[error("path {path:?} is shorter than the required {required} bytes")]
    TooShort {
        /// The request path as received.
        path: String,
        /// Minimum number of bytes the path must have.
        required: usize,
    },

    /// A fixed offset fell inside a multi-byte character.
    #[error("path {path:?} cannot be split at byte offset {offset}")]
    NotCharBoundary {
        /// The request path as received.
        path: String,
        /// The byte offset that is not on a character boundary.
        offset: usize,
    },
}
