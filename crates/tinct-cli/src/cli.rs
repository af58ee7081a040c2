//! Argument parsing and the render loop behind the `tinct` binary.

use std::io::Write;

use anyhow::Context;
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tinct::{render_with_rng, validate_strs, Color, RenderRequest, Styles, ValidationError};

/// Message used by `--demo`.
pub const DEMO_MESSAGE: &str = "Hello world!!!!";

/// Style text with ANSI colors for the terminal.
///
/// With a COLOR the whole text is colored once. Without one, every visible
/// character gets its own random color.
#[derive(Debug, Parser)]
#[command(name = "tinct", version, about)]
pub struct Cli {
    /// Text, optionally followed by a color: r, g, y, b, m, c, w or a full name
    #[arg(value_name = "TEXT [COLOR]")]
    pub args: Vec<String>,

    /// Bold text
    #[arg(short, long)]
    pub bold: bool,

    /// Underlined text
    #[arg(short, long)]
    pub underline: bool,

    /// Italic text
    #[arg(short, long)]
    pub italic: bool,

    /// Seed random-mode colors for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Print every color with sample styles, then random mode
    #[arg(long, conflicts_with_all = ["args", "bold", "underline", "italic"])]
    pub demo: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn styles(&self) -> Styles {
        Styles {
            bold: self.bold,
            underline: self.underline,
            italic: self.italic,
        }
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        }
    }
}

/// The requests printed by `--demo`, in order.
pub fn demo_requests() -> Vec<(RenderRequest, Styles)> {
    let italic_underline = Styles::new().italic().underline();
    let bold_underline = Styles::new().bold().underline();

    let requests = [
        (Some(Color::Red), italic_underline),
        (Some(Color::Magenta), italic_underline),
        (Some(Color::Cyan), bold_underline),
        (Some(Color::Blue), bold_underline),
        (Some(Color::Green), bold_underline),
        (Some(Color::Yellow), bold_underline),
        (Some(Color::White), bold_underline),
        (None, Styles::all()),
    ];

    requests
        .into_iter()
        .map(|(color, styles)| (RenderRequest::new(DEMO_MESSAGE, color), styles))
        .collect()
}

/// Validates the command line and renders every line to print.
pub fn render_lines(cli: &Cli) -> Result<Vec<String>, ValidationError> {
    let mut rng = cli.rng();

    if cli.demo {
        tracing::debug!("rendering demo");
        return Ok(demo_requests()
            .iter()
            .map(|(request, styles)| render_with_rng(request, *styles, &mut *rng))
            .collect());
    }

    let request = validate_strs(&cli.args)?;
    tracing::debug!(color = ?request.color(), "validated request");
    Ok(vec![render_with_rng(&request, cli.styles(), &mut *rng)])
}

/// Renders every line, then writes them to `out`.
///
/// Nothing is written when validation fails.
pub fn run<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let lines = render_lines(cli)?;
    for line in &lines {
        tinct::print_to(out, line).context("failed to write output")?;
    }
    Ok(())
}

/// Process exit status for a failed run: 2 for invalid input, 1 otherwise.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ValidationError>().is_some() {
        2
    } else {
        1
    }
}
