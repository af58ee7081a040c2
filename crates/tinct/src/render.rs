//! Rendering entry points and the explicit print step.
//!
//! Rendering never writes anywhere; it returns the finished string. Printing
//! is a separate call so callers decide when and where output goes.
//!
//! ```rust
//! use tinct::{render, Color, RenderRequest, Styles};
//!
//! let request = RenderRequest::new("hi", Some(Color::Red));
//! let out = render(&request, Styles::new().bold().underline());
//! assert_eq!(out, "\x1b[1m\x1b[4m\x1b[31mhi\x1b[0m");
//! ```

use std::io::{self, Write};

use console::Term;
use rand::Rng;
use serde_json::Value;

use crate::colorize::colorize;
use crate::error::ValidationError;
use crate::style::Styles;
use crate::validate::{validate, RenderRequest};

/// Renders a request. Random-mode colors come from the thread-local RNG.
pub fn render(request: &RenderRequest, styles: Styles) -> String {
    render_with_rng(request, styles, &mut rand::rng())
}

/// Renders a request with a caller-supplied RNG.
///
/// Pass a seeded RNG to make random-mode output reproducible.
pub fn render_with_rng<R: Rng + ?Sized>(
    request: &RenderRequest,
    styles: Styles,
    rng: &mut R,
) -> String {
    tracing::debug!(
        mode = %request.mode(),
        color = ?request.color(),
        ?styles,
        len = request.text().len(),
        "rendering"
    );
    colorize(request, styles, rng)
}

/// Validates raw arguments, then renders them.
///
/// ```rust
/// use serde_json::json;
/// use tinct::{render_args, Styles};
///
/// let out = render_args(&[json!("a b"), json!("r")], Styles::new()).unwrap();
/// assert_eq!(out, "\x1b[31ma b\x1b[0m");
/// ```
pub fn render_args(args: &[Value], styles: Styles) -> Result<String, ValidationError> {
    let request = validate(args)?;
    Ok(render(&request, styles))
}

/// Writes a rendered string to stdout as one line.
pub fn print(rendered: &str) -> io::Result<()> {
    print_to(&mut Term::stdout(), rendered)
}

/// Writes a rendered string to `out` as one line and flushes.
pub fn print_to<W: Write + ?Sized>(out: &mut W, rendered: &str) -> io::Result<()> {
    writeln!(out, "{}", rendered)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{Color, RESET};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_render_uniform() {
        let request = RenderRequest::new("hi", Some(Color::Red));
        assert_eq!(render(&request, Styles::new()), "\x1b[31mhi\x1b[0m");
    }

    #[test]
    fn test_render_random_resets() {
        let request = RenderRequest::new("a b c", None);
        assert_eq!(render(&request, Styles::new()).matches(RESET).count(), 3);
    }

    #[test]
    fn test_render_with_rng_reproducible() {
        let request = RenderRequest::new("seeded", None);
        let a = render_with_rng(&request, Styles::new(), &mut StdRng::seed_from_u64(1));
        let b = render_with_rng(&request, Styles::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_args_propagates_errors() {
        assert_eq!(
            render_args(&[json!("x"), json!("z")], Styles::new()),
            Err(ValidationError::invalid_color("z"))
        );
        assert_eq!(
            render_args(&[], Styles::new()),
            Err(ValidationError::arity(0))
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_to_writes_one_line() {
        let mut out = Vec::new();
        let rendered = render(&RenderRequest::new("hi", Some(Color::Red)), Styles::new());
        print_to(&mut out, &rendered).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[31mhi\x1b[0m\n");
    }

    #[test]
    fn test_print_to_appends_lines() {
        let mut out = Vec::new();
        print_to(&mut out, "a").unwrap();
        print_to(&mut out, "b").unwrap();
        assert_eq!(out, b"a\nb\n");
    }

    #[test]
    fn test_print_to_reports_write_errors() {
        let err = print_to(&mut BrokenPipe, "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_render_args_empty_text() {
        assert_eq!(render_args(&[json!("")], Styles::all()).unwrap(), "");
    }
}
