/// Result alias that carries the custom [`SingError`] type.
pub type Result<T> = std::result::Result<T, SingError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum SingError {
    /// Free-form message for conditions that have no dedicated variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors, most commonly a closed stdout.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A lyric sheet could not be parsed.
    #[error("invalid lyric sheet: {0}")]
    Sheet(#[from] serde_json::Error),
    /// A single animation job stopped before writing its whole line.
    #[error("line {line} failed: {source}")]
    JobFailed {
        line: usize,
        #[source]
        source: Box<SingError>,
    },
    /// At least one job of a song run failed. Siblings still ran to completion.
    #[error("{failed} of {total} lines failed to animate (first: {first})")]
    Jobs {
        failed: usize,
        total: usize,
        first: Box<SingError>,
    },
}

impl SingError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    /// Tags an error with the index of the lyric line that produced it.
    pub fn for_line(line: usize, source: SingError) -> Self {
        Self::JobFailed {
            line,
            source: Box::new(source),
        }
    }
}

impl From<&str> for SingError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SingError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
