//! Error types for render request validation.

/// Errors raised while validating the raw arguments of a render call.
///
/// All variants are produced before any rendering or printing happens, so a
/// failed call never leaves partial output behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Wrong number of positional arguments.
    #[error("expected 1 or 2 arguments (text) or (text, color), got {count}")]
    InvalidArity { count: usize },

    /// The text argument is not a string.
    #[error("text must be a string, got {type_name}")]
    InvalidType { type_name: String },

    /// The color token does not name one of the supported colors.
    #[error("invalid color: {token}")]
    InvalidColor { token: String },
}

impl ValidationError {
    /// Create an arity error.
    pub fn arity(count: usize) -> Self {
        Self::InvalidArity { count }
    }

    /// Create a type error.
    pub fn invalid_type(type_name: impl Into<String>) -> Self {
        Self::InvalidType {
            type_name: type_name.into(),
        }
    }

    /// Create a color error.
    pub fn invalid_color(token: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
        }
    }
}
