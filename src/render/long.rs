//! Long view: every field present in the torrent

use std::io::{self, Write};

use crate::metainfo::MetaInfo;
use crate::theme::Theme;

use super::utils::{format_bytes, indent};

pub fn render_long(
    out: &mut dyn Write,
    theme: &Theme,
    name: &str,
    mi: &MetaInfo,
) -> io::Result<()> {
    writeln!(out, "{}{}{}", theme.white_bold, name, theme.none)?;

    heading(out, theme, "announce groups")?;
    for (i, tier) in mi.announce_list.iter().enumerate() {
        writeln!(out, "{}{}{}{}", theme.yellow_bold, indent(2), i, theme.none)?;
        for url in tier {
            writeln!(out, "{}{}", indent(3), url)?;
        }
    }

    heading(out, theme, "created on")?;
    writeln!(out, "{}{}", indent(2), mi.creation_date)?;

    let optional = [
        ("comment", &mi.comment),
        ("created by", &mi.created_by),
        ("encoding", &mi.encoding),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            heading(out, theme, label)?;
            writeln!(out, "{}{}", indent(2), value)?;
        }
    }

    if !mi.web_seed_urls.is_empty() {
        heading(out, theme, "webseed urls")?;
        for url in &mi.web_seed_urls {
            writeln!(out, "{}{}", indent(2), url)?;
        }
    }

    if mi.is_single_file() {
        writeln!(
            out,
            "{}{}name{} (single file)",
            theme.green_bold,
            indent(1),
            theme.none
        )?;
        writeln!(out, "{}{}{}{}", indent(2), theme.yellow, mi.name, theme.none)?;
        heading(out, theme, "length")?;
        writeln!(
            out,
            "{}{}{}{}",
            indent(2),
            theme.cyan,
            format_bytes(mi.files[0].length),
            theme.none
        )?;
    } else {
        writeln!(
            out,
            "{}{}name{} (multiple files)",
            theme.green_bold,
            indent(1),
            theme.none
        )?;
        writeln!(out, "{}{}{}{}", indent(2), theme.yellow, mi.name, theme.none)?;
        writeln!(
            out,
            "{}{}files{} ({})",
            theme.green_bold,
            indent(1),
            theme.none,
            mi.files.len()
        )?;
        for file in &mi.files {
            writeln!(
                out,
                "{}{} ({}{}{})",
                indent(2),
                file.joined_path().display(),
                theme.cyan,
                format_bytes(file.length),
                theme.none
            )?;
        }
    }

    writeln!(out)
}

fn heading(out: &mut dyn Write, theme: &Theme, label: &str) -> io::Result<()> {
    writeln!(out, "{}{}{}{}", theme.green_bold, indent(1), label, theme.none)
}
