//! Fixed ANSI escape tables.
//!
//! Two flat lookup tables drive all output: seven foreground [`Color`]s and
//! three text decorations ([`StyleFlag`]). Every styled run is closed with
//! [`RESET`].
//!
//! | Token     | Letter | Code       |
//! |-----------|--------|------------|
//! | red       | `r`    | `\x1b[31m` |
//! | green     | `g`    | `\x1b[32m` |
//! | yellow    | `y`    | `\x1b[33m` |
//! | blue      | `b`    | `\x1b[34m` |
//! | magenta   | `m`    | `\x1b[35m` |
//! | cyan      | `c`    | `\x1b[36m` |
//! | white     | `w`    | `\x1b[37m` |
//!
//! ```rust
//! use tinct::Color;
//!
//! assert_eq!(Color::from_token("R").unwrap(), Color::Red);
//! assert_eq!("cyan".parse::<Color>().unwrap().code(), "\x1b[36m");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Escape sequence that restores default styling.
pub const RESET: &str = "\x1b[0m";

/// One of the seven supported foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every color, in table order. Random mode draws from this set.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The ANSI escape sequence selecting this foreground color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }

    /// Single-letter token.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Blue => 'b',
            Color::Magenta => 'm',
            Color::Cyan => 'c',
            Color::White => 'w',
        }
    }

    /// Lowercase color name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Resolves a color token, case-insensitively.
    ///
    /// Accepts either the single-letter code (`r`, `g`, `y`, `b`, `m`, `c`,
    /// `w`) or the full name. The token is not trimmed: `" r"` is rejected.
    pub fn from_token(token: &str) -> Result<Self, ValidationError> {
        match token.to_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "g" | "green" => Ok(Color::Green),
            "y" | "yellow" => Ok(Color::Yellow),
            "b" | "blue" => Ok(Color::Blue),
            "m" | "magenta" => Ok(Color::Magenta),
            "c" | "cyan" => Ok(Color::Cyan),
            "w" | "white" => Ok(Color::White),
            _ => Err(ValidationError::invalid_color(token)),
        }
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_token(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A text decoration that can be layered under a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    Bold,
    Underline,
    Italic,
}

impl StyleFlag {
    /// All flags in canonical prefix order.
    pub const ALL: [StyleFlag; 3] = [StyleFlag::Bold, StyleFlag::Underline, StyleFlag::Italic];

    /// The ANSI escape sequence enabling this decoration.
    pub fn code(self) -> &'static str {
        match self {
            StyleFlag::Bold => "\x1b[1m",
            StyleFlag::Underline => "\x1b[4m",
            StyleFlag::Italic => "\x1b[3m",
        }
    }
}
