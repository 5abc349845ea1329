//! # Error Types

/// Errors from childes-prep operations.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// An empty utterance reached a stage that requires at least one token.
    #[error("empty utterance #{index} in file {file_id:?}")]
    EmptyUtterance {
        /// The file containing the utterance.
        file_id: String,

        /// The position of the utterance within its file.
        index: usize,
    },

    /// The remix cut search ran off the end of the test partition.
    ///
    /// The whole tail of test belongs to one file, so no cut point exists
    /// that keeps the file intact.
    #[error("no file boundary in the tail of test; file {file_id:?} spans the cut")]
    RemixBoundaryNotFound {
        /// The file occupying the tail of test.
        file_id: String,
    },

    /// The test partition is smaller than the number of pairs to move to valid.
    #[error("test has {test_size} pairs, fewer than the {reshuffle_size} to move into valid")]
    RemixTestTooSmall {
        /// The number of pairs in test.
        test_size: usize,

        /// The number of pairs requested.
        reshuffle_size: usize,
    },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed input.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,

        /// What went wrong.
        message: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for childes-prep operations.
pub type PrepResult<T> = core::result::Result<T, PrepError>;
