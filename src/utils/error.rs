use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Malformed result line: {line:?}")]
    MalformedLineError { line: String },

    #[error("Score exceeds the representable range: {token:?}")]
    IntegerOverflowError { token: String },

    #[error("Line {line_no}: {source}")]
    LineError {
        line_no: usize,
        #[source]
        source: Box<LeagueError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {field}: {message}")]
    ConfigError { field: String, message: String },
}

impl LeagueError {
    /// Wrap with the 1-based line number the error was raised at.
    pub fn at_line(self, line_no: usize) -> Self {
        LeagueError::LineError {
            line_no,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
