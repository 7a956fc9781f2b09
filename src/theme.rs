//! Terminal color palette
//!
//! A [`Theme`] is built once per run, either colored or monochrome, and passed
//! by reference to everything that writes output. The escapes are plain
//! strings so they can be embedded in text that is later column-aligned.

use std::io;

use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Named color escapes. Every field is empty in the monochrome theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub red: String,
    pub red_bold: String,
    pub green: String,
    pub green_bold: String,
    pub yellow: String,
    pub yellow_bold: String,
    pub blue: String,
    pub blue_bold: String,
    pub magenta: String,
    pub magenta_bold: String,
    pub cyan: String,
    pub cyan_bold: String,
    pub white: String,
    pub white_bold: String,
    /// Resets all attributes.
    pub none: String,
}

impl Theme {
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self::colored()
        } else {
            Self::monochrome()
        }
    }

    /// ANSI escapes for every color. Falls back to monochrome if the escapes
    /// cannot be rendered.
    pub fn colored() -> Self {
        Self::try_colored().unwrap_or_else(|_| Self::monochrome())
    }

    fn try_colored() -> io::Result<Self> {
        Ok(Self {
            red: escape(Color::Red, false)?,
            red_bold: escape(Color::Red, true)?,
            green: escape(Color::Green, false)?,
            green_bold: escape(Color::Green, true)?,
            yellow: escape(Color::Yellow, false)?,
            yellow_bold: escape(Color::Yellow, true)?,
            blue: escape(Color::Blue, false)?,
            blue_bold: escape(Color::Blue, true)?,
            magenta: escape(Color::Magenta, false)?,
            magenta_bold: escape(Color::Magenta, true)?,
            cyan: escape(Color::Cyan, false)?,
            cyan_bold: escape(Color::Cyan, true)?,
            white: escape(Color::White, false)?,
            white_bold: escape(Color::White, true)?,
            none: ansi_string(|ansi| ansi.reset())?,
        })
    }

    /// Every color is the empty string.
    pub fn monochrome() -> Self {
        Self::default()
    }

    pub fn is_colored(&self) -> bool {
        !self.none.is_empty()
    }
}

/// Render a color spec to its escape sequence.
fn escape(color: Color, bold: bool) -> io::Result<String> {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(bold);
    ansi_string(|ansi| ansi.set_color(&spec))
}

/// Capture what `write` emits through an ANSI writer.
fn ansi_string(
    write: impl FnOnce(&mut Ansi<Vec<u8>>) -> io::Result<()>,
) -> io::Result<String> {
    let mut ansi = Ansi::new(Vec::new());
    write(&mut ansi)?;
    String::from_utf8(ansi.into_inner())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
