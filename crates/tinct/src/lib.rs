//! # Tinct - ANSI Styling for Terminal Strings
//!
//! `tinct` wraps text in ANSI color and decoration escapes for terminal
//! output. Give it text, an optional color and any mix of bold, underline and
//! italic, and it returns the styled string.
//!
//! ## Core Concepts
//!
//! - [`Color`]: one of seven foreground colors, addressed by letter or name
//! - [`Styles`]: the active decorations, emitted as a prefix in a fixed order
//! - [`RenderRequest`]: validated text plus optional color
//! - [`validate`]: turns raw, dynamically typed arguments into a request
//! - [`render`]: produces the finished string; [`print`] writes it out
//!
//! ## Two Modes
//!
//! With a color, the whole text is colored once (*uniform mode*):
//!
//! ```rust
//! use tinct::{render, Color, RenderRequest, Styles};
//!
//! let out = render(&RenderRequest::new("a b", Some(Color::Red)), Styles::new());
//! assert_eq!(out, "\x1b[31ma b\x1b[0m");
//! ```
//!
//! Without one, each visible character gets its own random color and reset,
//! while whitespace passes through bare (*per-character random mode*):
//!
//! ```rust
//! use tinct::{render, RenderRequest, Styles};
//!
//! let out = render(&RenderRequest::new("a b", None), Styles::new());
//! assert_eq!(console::strip_ansi_codes(&out), "a b");
//! assert_eq!(out.matches("\x1b[0m").count(), 2);
//! ```
//!
//! Output is always trimmed of leading and trailing whitespace.
//!
//! ## Raw Arguments
//!
//! ```rust
//! use serde_json::json;
//! use tinct::{render_args, Styles, ValidationError};
//!
//! let out = render_args(&[json!("hi"), json!("R")], Styles::new().bold()).unwrap();
//! assert_eq!(out, "\x1b[1m\x1b[31mhi\x1b[0m");
//!
//! let err = render_args(&[json!("hi"), json!("z")], Styles::new()).unwrap_err();
//! assert_eq!(err, ValidationError::InvalidColor { token: "z".into() });
//! ```
//!
//! ## Console Setup
//!
//! On legacy Windows consoles, call
//! [`platform::enable_ansi_console`] once before printing.

pub mod ansi;
pub mod colorize;
mod error;
pub mod platform;
mod render;
pub mod style;
pub mod validate;

pub use ansi::{Color, StyleFlag, RESET};
pub use error::ValidationError;
pub use render::{print, print_to, render, render_args, render_with_rng};
pub use style::Styles;
pub use validate::{validate, validate_strs, RenderMode, RenderRequest};
