// Thu Oct 15 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_VERSION_LEN: usize = 5;
pub const MAX_VERSION_LEN: usize = 20;

/// Recognized release-year and legacy major prefixes. Versions outside this
/// list are rejected even when well formed.
pub const VERSION_PREFIXES: &[&str] = &[
    "2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024", "2025", "5.", "4.", "3.",
];

static VERSION_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{4}\.[0-9]+\.[0-9]+[a-zA-Z]?[0-9]*|[0-9]\.[0-9]+\.[0-9]+[a-zA-Z]?[0-9]*)$")
        .expect("version shape regex")
});

pub fn is_valid_unity_version(candidate: &str) -> bool {
    if candidate.len() < MIN_VERSION_LEN || candidate.len() > MAX_VERSION_LEN {
        return false;
    }
    if !VERSION_PREFIXES.iter().any(|prefix| candidate.starts_with(prefix)) {
        return false;
    }
    if !candidate.contains('.') {
        return false;
    }
    VERSION_SHAPE.is_match(candidate)
}
