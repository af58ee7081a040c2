//! The colorizing engine.
//!
//! A [`RenderRequest`] with a color is rendered in *uniform mode*: the style
//! prefix and color code open the whole text once and a single reset closes
//! it.
//!
//! Without a color, the text is rendered in *per-character random mode*: every
//! visible character is wrapped individually in the style prefix, a color
//! drawn uniformly from [`Color::ALL`], and a reset. Whitespace and
//! non-printable characters are copied through untouched.
//!
//! Both modes finish with [`finalize`], which trims leading and trailing
//! whitespace.

use rand::Rng;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::ansi::{Color, RESET};
use crate::style::Styles;
use crate::validate::RenderRequest;

/// Whether a character gets its own color in random mode.
///
/// Whitespace is skipped, as is anything that does not print: control,
/// format, surrogate, private-use and unassigned code points, plus the line
/// and paragraph separators.
pub fn is_visible(c: char) -> bool {
    if c.is_whitespace() {
        return false;
    }
    !matches!(
        c.general_category(),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Whitespace for trimming: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F.
fn is_trim_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Renders a request, drawing random-mode colors from `rng`.
///
/// The result is already finalized.
pub fn colorize<R: Rng + ?Sized>(request: &RenderRequest, styles: Styles, rng: &mut R) -> String {
    let prefix = styles.prefix();
    let raw = match request.color() {
        Some(color) => uniform(request.text(), &prefix, color),
        None => per_char(request.text(), &prefix, rng),
    };
    finalize(raw)
}

fn uniform(text: &str, prefix: &str, color: Color) -> String {
    let mut out = String::with_capacity(prefix.len() + text.len() + 9);
    out.push_str(prefix);
    out.push_str(color.code());
    out.push_str(text);
    out.push_str(RESET);
    out
}

fn per_char<R: Rng + ?Sized>(text: &str, prefix: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len() * (prefix.len() + 10));
    for c in text.chars() {
        if is_visible(c) {
            let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
            out.push_str(prefix);
            out.push_str(color.code());
            out.push(c);
            out.push_str(RESET);
        } else {
            out.push(c);
        }
    }
    out
}

/// Strips leading and trailing whitespace, keeping everything in between.
pub fn finalize(raw: String) -> String {
    let trimmed = raw.trim_matches(is_trim_space);
    if trimmed.len() == raw.len() {
        raw
    } else {
        trimmed.to_string()
    }
}
