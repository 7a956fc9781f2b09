//! Formatting helpers shared by all view modes

use std::borrow::Cow;

const INDENT: &str = "    ";

const INDENTS: [&str; 7] = [
    "",
    "    ",
    "        ",
    "            ",
    "                ",
    "                    ",
    "                        ",
];

const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Indentation for nesting level `depth`, four spaces per level.
pub fn indent(depth: usize) -> Cow<'static, str> {
    match INDENTS.get(depth) {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(INDENT.repeat(depth)),
    }
}

/// Format a byte count with binary prefixes: `"9 B"`, `"1.5 GiB"`, `"512 KiB"`.
///
/// Values below 10 in their unit keep one decimal, rounded half up.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut exp = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && exp < UNITS.len() - 1 {
        scaled /= 1024;
        exp += 1;
    }

    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let value = (value * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{:.1} {}", value, UNITS[exp])
    } else {
        format!("{:.0} {}", value, UNITS[exp])
    }
}

/// `"file"` or `"files"` depending on `count`.
pub fn file_word(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_table_and_fallback() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "    ");
        assert_eq!(indent(3), "            ");
        assert_eq!(indent(6).len(), 24);
        assert_eq!(indent(9).len(), 36);
        assert!(matches!(indent(2), Cow::Borrowed(_)));
        assert!(matches!(indent(7), Cow::Owned(_)));
    }

    #[test]
    fn test_format_bytes_small() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(9), "9 B");
        assert_eq!(format_bytes(10), "10 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(1024), "1.0 KiB");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(10 * 1024), "10 KiB");
        assert_eq!(format_bytes(512 * 1024), "512 KiB");
        assert_eq!(format_bytes(1_610_612_736), "1.5 GiB");
        assert_eq!(format_bytes(5 * 1024u64.pow(4)), "5.0 TiB");
        assert_eq!(format_bytes(u64::MAX), "16 EiB");
    }

    #[test]
    fn test_format_bytes_rounds_half_up() {
        // 1.25 KiB
        assert_eq!(format_bytes(1280), "1.3 KiB");
        // 1.04 KiB
        assert_eq!(format_bytes(1065), "1.0 KiB");
    }

    /// Parse a rendered size back into an approximate byte count.
    fn parse(rendered: &str) -> f64 {
        let (value, unit) = rendered.split_once(' ').unwrap();
        let exp = UNITS.iter().position(|u| *u == unit).unwrap();
        value.parse::<f64>().unwrap() * 1024f64.powi(exp as i32)
    }

    #[test]
    fn test_format_bytes_monotonic() {
        let mut samples: Vec<u64> = (0..64)
            .flat_map(|shift| {
                let base = 1u64 << shift;
                [base - 1, base, base + base / 3, base / 2 * 3]
            })
            .collect();
        samples.extend((0..5000).map(|n| n * 97));
        samples.sort_unstable();

        let mut previous = 0.0;
        for bytes in samples {
            let rendered = format_bytes(bytes);
            let value = parse(&rendered);
            assert!(value >= previous, "{} -> {} went backwards", bytes, rendered);
            // Same order of magnitude as the input.
            if bytes >= 10 {
                let ratio = value / bytes as f64;
                assert!((0.9..=1.1).contains(&ratio), "{} -> {}", bytes, rendered);
            }
            previous = value;
        }
    }

    #[test]
    fn test_file_word() {
        assert_eq!(file_word(1), "file");
        assert_eq!(file_word(0), "files");
        assert_eq!(file_word(2), "files");
    }
}
