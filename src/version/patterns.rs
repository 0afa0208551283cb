// Thu Oct 15 2026 - Alex

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Literal token the anchored tier searches for.
pub const MARKER: &[u8] = b"Unity";

/// Byte prefixes the lexical tier tries, in order.
pub const LEXICAL_PREFIXES: &[&[u8]] = &[b"20", b"5.", b"4.", b"3."];

// `(?-u)` keeps the classes ASCII-only and lets the patterns run over arbitrary bytes.
const PATTERN_SOURCES: &[&str] = &[
    r"(?i-u)([0-9]+\.[0-9]+\.[0-9]+[a-z]?[0-9]*)",
    r"(?i-u)Unity ([0-9]+\.[0-9]+\.[0-9]+)",
    r"(?i-u)unity version[:\s]+([0-9]+\.[0-9]+\.[0-9]+[a-z]?[0-9]*)",
];

pub static VERSION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|source| Regex::new(source).expect("version pattern"))
        .collect()
});

/// Every offset at which `needle` starts, overlapping occurrences included.
pub fn find_all<'a>(haystack: &'a [u8], needle: &[u8]) -> impl Iterator<Item = usize> + 'a {
    let needle = needle.to_vec();
    let last = haystack.len().checked_sub(needle.len());
    let first = needle.first().copied();

    (0..last.map_or(0, |l| l + 1)).filter(move |&i| {
        Some(haystack[i]) == first && haystack[i..i + needle.len()] == needle[..]
    })
}
