//! Validation of raw render arguments.
//!
//! Callers that hold dynamically typed input (a script binding, a JSON
//! payload, parsed command-line words) pass it through [`validate`] to get a
//! [`RenderRequest`]. Typed callers can build a request directly with
//! [`RenderRequest::new`], which cannot fail.
//!
//! The rules, checked in order:
//!
//! 1. Exactly one argument `(text)` or two `(text, color)`.
//! 2. `text` must be a string.
//! 3. `color`, when present and not `null`, must resolve through
//!    [`Color::from_token`].
//!
//! ```rust
//! use serde_json::json;
//! use tinct::{validate, Color, ValidationError};
//!
//! let request = validate(&[json!("hi"), json!("R")]).unwrap();
//! assert_eq!(request.color(), Some(Color::Red));
//!
//! assert!(matches!(
//!     validate(&[json!(42)]),
//!     Err(ValidationError::InvalidType { .. })
//! ));
//! ```

use std::fmt;

use serde_json::Value;

use crate::ansi::Color;
use crate::error::ValidationError;

/// How a request will be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One color for the whole text.
    Uniform,
    /// An independent random color per visible character.
    Random,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Uniform => f.write_str("uniform"),
            RenderMode::Random => f.write_str("random"),
        }
    }
}

/// A validated render input: the text and its resolved color, if any.
///
/// No color selects per-character random mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    text: String,
    color: Option<Color>,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn mode(&self) -> RenderMode {
        match self.color {
            Some(_) => RenderMode::Uniform,
            None => RenderMode::Random,
        }
    }
}

/// Validates raw arguments into a [`RenderRequest`].
pub fn validate(args: &[Value]) -> Result<RenderRequest, ValidationError> {
    let (text, color) = match args {
        [text] => (text, None),
        [text, color] => (text, Some(color)),
        _ => return Err(ValidationError::arity(args.len())),
    };

    let text = match text {
        Value::String(s) => s,
        other => return Err(ValidationError::invalid_type(type_name(other))),
    };

    let color = match color {
        None | Some(Value::Null) => None,
        Some(Value::String(token)) => Some(Color::from_token(token)?),
        Some(other) => return Err(ValidationError::invalid_color(other.to_string())),
    };

    Ok(RenderRequest::new(text.as_str(), color))
}

/// Validates string-only arguments, such as command-line words.
pub fn validate_strs<S: AsRef<str>>(args: &[S]) -> Result<RenderRequest, ValidationError> {
    let values: Vec<Value> = args
        .iter()
        .map(|arg| Value::String(arg.as_ref().to_string()))
        .collect();
    validate(&values)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
