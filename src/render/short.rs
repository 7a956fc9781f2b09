//! Short view: the file name, then name, size and file count on one line

use std::io::{self, Write};

use crate::metainfo::MetaInfo;
use crate::theme::Theme;

use super::utils::{file_word, format_bytes, indent};

pub fn render_short(
    out: &mut dyn Write,
    theme: &Theme,
    name: &str,
    mi: &MetaInfo,
) -> io::Result<()> {
    let count = mi.files.len();
    writeln!(out, "{}{}{}", theme.white_bold, name, theme.none)?;
    writeln!(
        out,
        "{}{}{}{} ({}{}{} in {} {})",
        indent(1),
        theme.yellow,
        mi.name,
        theme.none,
        theme.cyan,
        format_bytes(mi.total_length()),
        theme.none,
        count,
        file_word(count),
    )
}

#[cfg(test)]
mod tests {
    use crate::render::{ViewMode, render_to_string};
    use crate::test_utils::TorrentBuilder;
    use crate::theme::Theme;

    #[test]
    fn test_single_file() {
        let mi = TorrentBuilder::single("ubuntu.iso", 1_610_612_736).build();
        let out = render_to_string(ViewMode::Short, &Theme::monochrome(), "ubuntu.torrent", &mi);
        assert_eq!(out, "ubuntu.torrent\n    ubuntu.iso (1.5 GiB in 1 file)\n");
    }

    #[test]
    fn test_multi_file_sums_lengths() {
        let mi = TorrentBuilder::multi("album")
            .file(&["01.flac"], 1024)
            .file(&["02.flac"], 1024)
            .file(&["cover.jpg"], 1024)
            .build();
        let out = render_to_string(ViewMode::Short, &Theme::monochrome(), "album.torrent", &mi);
        assert_eq!(out, "album.torrent\n    album (3.0 KiB in 3 files)\n");
    }

    #[test]
    fn test_colored() {
        let theme = Theme::colored();
        let mi = TorrentBuilder::single("a", 5).build();
        let out = render_to_string(ViewMode::Short, &theme, "a.torrent", &mi);
        let expected = format!(
            "{wb}a.torrent{n}\n    {y}a{n} ({c}5 B{n} in 1 file)\n",
            wb = theme.white_bold,
            n = theme.none,
            y = theme.yellow,
            c = theme.cyan,
        );
        assert_eq!(out, expected);
    }
}
