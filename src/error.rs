use thiserror::Error;

/// Main error type for kinchart
#[derive(Error, Debug)]
pub enum KinchartError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV records (wrong field count, bad encoding)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input has no header row
    #[error("CSV file is empty or headers are missing.")]
    EmptyInput,

    /// Header row lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using KinchartError
pub type Result<T> = std::result::Result<T, KinchartError>;
