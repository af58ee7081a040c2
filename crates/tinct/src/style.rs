//! Text decoration flags and the style prefix they produce.

use crate::ansi::StyleFlag;

/// The set of active decorations for a render.
///
/// Flags are independent; any combination is valid. The default has none set.
///
/// ```rust
/// use tinct::Styles;
///
/// let styles = Styles::new().bold().italic();
/// assert_eq!(styles.prefix(), "\x1b[1m\x1b[3m");
/// assert_eq!(Styles::new().prefix(), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Styles {
    pub bold: bool,
    pub underline: bool,
    pub italic: bool,
}

impl Styles {
    /// No decorations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every decoration.
    pub fn all() -> Self {
        Self {
            bold: true,
            underline: true,
            italic: true,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Enable a single flag.
    pub fn with(self, flag: StyleFlag) -> Self {
        match flag {
            StyleFlag::Bold => self.bold(),
            StyleFlag::Underline => self.underline(),
            StyleFlag::Italic => self.italic(),
        }
    }

    pub fn contains(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Underline => self.underline,
            StyleFlag::Italic => self.italic,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.bold || self.underline || self.italic)
    }

    /// Active flags in canonical order: bold, underline, italic.
    pub fn flags(&self) -> impl Iterator<Item = StyleFlag> + '_ {
        StyleFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }

    /// Concatenated escape codes of the active flags, in canonical order.
    pub fn prefix(&self) -> String {
        self.flags().map(StyleFlag::code).collect()
    }
}

impl FromIterator<StyleFlag> for Styles {
    fn from_iter<I: IntoIterator<Item = StyleFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Styles::new(), Styles::with)
    }
}
