//! Basic view: a table of the main fields
//!
//! Every row is `<label>\t<value>` behind a leading tab, so the column
//! writer lines the values up under each other.

use std::fmt::Display;
use std::io::{self, Write};

use crate::metainfo::MetaInfo;
use crate::theme::Theme;

use super::utils::format_bytes;

pub fn render_basic(
    out: &mut dyn Write,
    theme: &Theme,
    name: &str,
    mi: &MetaInfo,
) -> io::Result<()> {
    writeln!(out, "{}{}{}", theme.white_bold, name, theme.none)?;

    row(out, theme, "name", colored(&theme.yellow, &mi.name, theme))?;
    row(out, theme, "tracker url", mi.tracker_url().unwrap_or_default())?;
    row(out, theme, "created by", &mi.created_by)?;
    row(
        out,
        theme,
        "created on",
        colored(&theme.magenta, mi.creation_date, theme),
    )?;

    if mi.is_single_file() {
        row(out, theme, "file name", &mi.name)?;
        row(
            out,
            theme,
            "file size",
            colored(&theme.cyan, format_bytes(mi.files[0].length), theme),
        )?;
    } else {
        row(out, theme, "num files", mi.files.len())?;
        row(
            out,
            theme,
            "total size",
            colored(&theme.cyan, format_bytes(mi.total_length()), theme),
        )?;
    }

    writeln!(out)
}

fn row(out: &mut dyn Write, theme: &Theme, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "{}\t{}\t{}{}", theme.green_bold, label, theme.none, value)
}

fn colored(color: &str, value: impl Display, theme: &Theme) -> String {
    format!("{}{}{}", color, value, theme.none)
}
