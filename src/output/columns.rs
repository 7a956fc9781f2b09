//! Tab-aligned column writer
//!
//! `ColumnWriter` buffers text and turns tab-terminated cells into aligned
//! columns (elastic tabstops). A column block is a run of consecutive lines
//! that all have a terminated cell in that column; each cell in the block is
//! padded to the widest cell plus `padding` spaces. Text after the last tab
//! of a line is not part of any column.
//!
//! A completed line without tabs ends every open block, so the buffer is
//! written out at that point instead of waiting for `flush`.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

pub struct ColumnWriter<W: Write> {
    inner: W,
    padding: usize,
    pending: Vec<u8>,
    line_has_tab: bool,
}

impl<W: Write> ColumnWriter<W> {
    pub fn new(inner: W, padding: usize) -> Self {
        Self {
            inner,
            padding,
            pending: Vec::new(),
            line_has_tab: false,
        }
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Lay out and write everything buffered so far.
    fn write_pending(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        self.line_has_tab = false;

        let body = text.strip_suffix('\n').unwrap_or(&text);
        let lines: Vec<Vec<&str>> = body.split('\n').map(|l| l.split('\t').collect()).collect();

        let mut out = String::with_capacity(text.len());
        let mut widths = Vec::new();
        self.format_block(&lines, &mut widths, &mut out);
        if !text.ends_with('\n') {
            out.pop();
        }
        self.inner.write_all(out.as_bytes())
    }

    /// Align the column `widths.len()` within `lines`, recursing into each
    /// block for the columns to its right.
    fn format_block(&self, lines: &[Vec<&str>], widths: &mut Vec<usize>, out: &mut String) {
        let column = widths.len();
        let has_cell = |line: &Vec<&str>| column + 1 < line.len();

        let mut start = 0;
        let mut i = 0;
        while i < lines.len() {
            if !has_cell(&lines[i]) {
                i += 1;
                continue;
            }

            write_lines(&lines[start..i], widths, out);
            start = i;

            let mut width = 0;
            while i < lines.len() && has_cell(&lines[i]) {
                width = width.max(display_width(lines[i][column]) + self.padding);
                i += 1;
            }

            widths.push(width);
            self.format_block(&lines[start..i], widths, out);
            widths.pop();
            start = i;
        }

        write_lines(&lines[start..], widths, out);
    }
}

fn write_lines(lines: &[Vec<&str>], widths: &[usize], out: &mut String) {
    for line in lines {
        for (j, cell) in line.iter().enumerate() {
            out.push_str(cell);
            if let Some(&width) = widths.get(j) {
                let fill = width.saturating_sub(display_width(cell));
                out.extend(std::iter::repeat_n(' ', fill));
            }
        }
        out.push('\n');
    }
}

/// Terminal columns `cell` occupies, ignoring ANSI CSI sequences.
pub fn display_width(cell: &str) -> usize {
    let mut width = 0;
    let mut rest = cell;
    while let Some(esc) = rest.find('\x1b') {
        width += rest[..esc].width();
        rest = skip_escape(&rest[esc + 1..]);
    }
    width + rest.width()
}

/// Step past the body of an escape whose ESC was already consumed.
fn skip_escape(s: &str) -> &str {
    match s.strip_prefix('[') {
        Some(csi) => match csi.find(|c: char| ('@'..='~').contains(&c)) {
            Some(end) => &csi[end + 1..],
            None => "",
        },
        None => s,
    }
}

impl<W: Write> Write for ColumnWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &b in buf {
            self.pending.push(b);
            match b {
                b'\t' => self.line_has_tab = true,
                b'\n' if !self.line_has_tab => self.write_pending()?,
                b'\n' => self.line_has_tab = false,
                _ => {}
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_pending()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for ColumnWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
