use thiserror::Error;

/// A named error carried back into the engine's propagation mechanism.
///
/// Native functions return this instead of unwinding; the interpreter turns
/// it into an exception value in the scripting language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {message}")]
pub struct EngineError {
    pub name: String,
    pub message: String,
}

impl EngineError {
    /// Build a custom error with an explicit name.
    pub fn custom(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Build a `TypeError`.
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::custom("TypeError", message)
    }
}
