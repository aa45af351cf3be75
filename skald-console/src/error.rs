use skald_value::EngineError;
use thiserror::Error;

/// Failures surfaced by the console entry points.
///
/// Nothing here is fatal or retried; every failure is scoped to the call
/// that produced it and is handed back to the engine to raise.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Wrong arity or argument type on `time`, `timeEnd`, or `assert`.
    #[error("invalid argument")]
    InvalidArgument,

    /// Timer label missing or stale at `timeEnd`.
    #[error("unexpected value")]
    UnexpectedValue,

    /// An `assert` condition evaluated false.
    #[error("{message}")]
    Assertion { message: String },

    /// A sink write failed.
    #[error("console i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConsoleError> for EngineError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::Assertion { message } => EngineError::custom("AssertionError", message),
            ConsoleError::Io(io) => EngineError::custom("InternalError", io.to_string()),
            other => EngineError::type_error(other.to_string()),
        }
    }
}
