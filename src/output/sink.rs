//! Per-mode output destination

use std::io::{self, BufWriter, Write};

use crate::render::ViewMode;

use super::columns::ColumnWriter;

/// Minimum gap between aligned columns in short mode.
pub const SHORT_PADDING: usize = 1;
/// Minimum gap between aligned columns in basic mode.
pub const BASIC_PADDING: usize = 4;

/// Where rendered output goes for the whole run.
///
/// Short and basic output is column-aligned; long output has no columns and
/// is written through a plain buffer. Either way the sink is flushed when it
/// is dropped, so buffered output survives early returns.
pub enum OutputSink<W: Write> {
    Columns(ColumnWriter<W>),
    Direct(BufWriter<W>),
}

impl<W: Write> OutputSink<W> {
    pub fn for_mode(mode: ViewMode, writer: W) -> Self {
        match mode {
            ViewMode::Short => Self::Columns(ColumnWriter::new(writer, SHORT_PADDING)),
            ViewMode::Basic => Self::Columns(ColumnWriter::new(writer, BASIC_PADDING)),
            ViewMode::Long => Self::Direct(BufWriter::new(writer)),
        }
    }

    /// Column padding, or `None` when output is not aligned.
    pub fn padding(&self) -> Option<usize> {
        match self {
            Self::Columns(w) => Some(w.padding()),
            Self::Direct(_) => None,
        }
    }
}

impl<W: Write> Write for OutputSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Columns(w) => w.write(buf),
            Self::Direct(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Columns(w) => w.flush(),
            Self::Direct(w) => w.flush(),
        }
    }
}
