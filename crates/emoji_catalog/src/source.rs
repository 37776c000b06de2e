//! Helpers for feeding the parser from a description file.
//!
//! The parser itself only sees an iterator of lines; these adapters cover the
//! two ways a real source differs from a plain text file: the bundled
//! resource is gzip-framed, and some platforms splice bonus sequences into
//! the stream after a well-known anchor line.

use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;

/// The bonus sequences are spliced in right after this prefix
/// (`1F63E … pouting cat`).
pub const BONUS_ANCHOR: &str = "1F63E ";

/// Extra ZWJ sequences historically shipped by Windows but absent from the
/// description source. None carry a version marker.
pub const BONUS_LINES: &[&str] = &[
    "1F431 200D 1F3CD ; fully-qualified # \u{1F431}\u{200D}\u{1F3CD} stunt cat",
    "1F431 200D 1F453 ; fully-qualified # \u{1F431}\u{200D}\u{1F453} hipster cat",
    "1F431 200D 1F680 ; fully-qualified # \u{1F431}\u{200D}\u{1F680} astro cat",
    "1F431 200D 1F464 ; fully-qualified # \u{1F431}\u{200D}\u{1F464} ninja cat",
    "1F431 200D 1F409 ; fully-qualified # \u{1F431}\u{200D}\u{1F409} dino cat",
    "1F431 200D 1F4BB ; fully-qualified # \u{1F431}\u{200D}\u{1F4BB} hacker cat",
];

/// Reads a description file into lines, inflating it first when the gzip
/// magic is present.
pub fn read_description<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let raw = std::fs::read(path)?;

    let text = if raw.starts_with(&[0x1f, 0x8b]) {
        let mut text = String::new();
        GzDecoder::new(&raw[..]).read_to_string(&mut text)?;
        text
    } else {
        String::from_utf8(raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    };

    Ok(text.lines().map(String::from).collect())
}

/// Splices `extra` in after every line starting with `anchor`.
pub fn splice_after<I>(lines: I, anchor: &str, extra: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();

    for line in lines {
        let hit = line.starts_with(anchor);
        out.push(line);

        if hit {
            out.extend(extra.iter().map(|s| s.to_string()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_after_anchor() {
        let lines = vec![
            "1F63C ; fully-qualified # \u{1F63C} E0.6 cat with wry smile".to_owned(),
            "1F63E ; fully-qualified # \u{1F63E} E0.6 pouting cat".to_owned(),
            "1F640 ; fully-qualified # \u{1F640} E0.6 weary cat".to_owned(),
        ];

        let spliced = splice_after(lines, BONUS_ANCHOR, BONUS_LINES);

        assert_eq!(spliced.len(), 3 + BONUS_LINES.len());
        assert!(spliced[1].starts_with("1F63E "));
        assert_eq!(spliced[2], BONUS_LINES[0]);
        assert!(spliced.last().unwrap().ends_with("weary cat"));
    }

    #[test]
    fn test_splice_without_anchor_is_identity() {
        let lines = vec!["# group: Flags".to_owned()];

        assert_eq!(splice_after(lines.clone(), BONUS_ANCHOR, BONUS_LINES), lines);
    }
}
