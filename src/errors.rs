use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Argument below its permitted minimum
    #[error("Argument out of range: {parameter} = {value} (must be >= {minimum})")]
    OutOfRange {
        parameter: &'static str,
        value: i64,
        minimum: i64,
    },

    /// Squaring guard tripped before reaching the i32 representable limit
    #[error("Overflow: square of {value} is {square}, exceeding threshold {threshold}")]
    Overflow {
        value: i64,
        square: i64,
        threshold: i64,
    },

    /// Required input collection or text was absent
    #[error("Argument must not be null: {0}")]
    NullArgument(&'static str),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}
