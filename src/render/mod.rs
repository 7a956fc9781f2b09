//! Rendering of decoded torrents
//!
//! One renderer per [`ViewMode`]. Renderers write plain text with theme
//! escapes and tab-separated cells into whatever sink the session selected;
//! alignment is the sink's job.

mod basic;
mod long;
mod short;
mod utils;

use std::fmt::Display;
use std::io::{self, Write};

use crate::metainfo::MetaInfo;
use crate::theme::Theme;

pub use basic::render_basic;
pub use long::render_long;
pub use short::render_short;
pub use utils::{file_word, format_bytes, indent};

/// How much of each torrent to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Two lines per file.
    Short,
    /// A table of the main fields.
    #[default]
    Basic,
    /// Every field, including trackers, web seeds and the file list.
    Long,
}

/// Render `mi` under the display name `name` in the given mode.
pub fn render(
    mode: ViewMode,
    out: &mut dyn Write,
    theme: &Theme,
    name: &str,
    mi: &MetaInfo,
) -> io::Result<()> {
    match mode {
        ViewMode::Short => render_short(out, theme, name, mi),
        ViewMode::Basic => render_basic(out, theme, name, mi),
        ViewMode::Long => render_long(out, theme, name, mi),
    }
}

/// Write the one-line report for a path that could not be read or decoded.
pub fn render_error(
    out: &mut dyn Write,
    theme: &Theme,
    name: impl Display,
    err: impl Display,
) -> io::Result<()> {
    writeln!(out, "{}{}{} (error: {})", theme.white_bold, name, theme.none, err)
}

#[cfg(test)]
pub(crate) fn render_to_string(mode: ViewMode, theme: &Theme, name: &str, mi: &MetaInfo) -> String {
    let mut buf = Vec::new();
    render(mode, &mut buf, theme, name, mi).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("rendered output is UTF-8")
}
