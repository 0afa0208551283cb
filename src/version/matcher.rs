// Thu Oct 15 2026 - Alex

use crate::config::ExtractorConfig;
use crate::version::patterns::{find_all, LEXICAL_PREFIXES, MARKER, VERSION_PATTERNS};
use crate::version::validate::{is_valid_unity_version, MIN_VERSION_LEN};
use log::trace;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Structured patterns inside a window around the marker token.
    Anchored,
    /// Structured patterns over the head of the buffer.
    Bulk,
    /// Printable runs starting at a version-like prefix.
    Lexical,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Anchored => "anchored",
            MatchTier::Bulk => "bulk",
            MatchTier::Lexical => "lexical",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    pub version: String,
    pub tier: MatchTier,
    pub offset: usize,
}

#[derive(Debug, Clone)]
pub struct VersionMatcher {
    anchor_limit: usize,
    window_before: usize,
    window_after: usize,
    search_ceiling: usize,
    lexical_extent: usize,
}

impl VersionMatcher {
    pub fn new() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            anchor_limit: config.anchor_limit,
            window_before: config.window_before,
            window_after: config.window_after,
            search_ceiling: config.search_ceiling,
            lexical_extent: config.lexical_extent,
        }
    }

    /// Runs the anchored, bulk and lexical tiers in that order and returns the
    /// first validated candidate.
    pub fn find(&self, data: &[u8]) -> Option<VersionMatch> {
        self.find_anchored(data)
            .or_else(|| self.find_bulk(data))
            .or_else(|| self.find_lexical(data))
    }

    pub fn find_version(&self, data: &[u8]) -> Option<String> {
        self.find(data).map(|m| m.version)
    }

    pub fn find_anchored(&self, data: &[u8]) -> Option<VersionMatch> {
        for offset in find_all(data, MARKER).take(self.anchor_limit) {
            let start = offset.saturating_sub(self.window_before);
            let end = offset.saturating_add(self.window_after).min(data.len());

            if let Some((version, at)) = Self::match_patterns(&data[start..end]) {
                trace!("Anchored match {} near marker at 0x{:x}", version, offset);
                return Some(VersionMatch {
                    version,
                    tier: MatchTier::Anchored,
                    offset: start + at,
                });
            }
        }
        None
    }

    pub fn find_bulk(&self, data: &[u8]) -> Option<VersionMatch> {
        let head = &data[..data.len().min(self.search_ceiling)];
        Self::match_patterns(head).map(|(version, offset)| VersionMatch {
            version,
            tier: MatchTier::Bulk,
            offset,
        })
    }

    pub fn find_lexical(&self, data: &[u8]) -> Option<VersionMatch> {
        for prefix in LEXICAL_PREFIXES {
            for start in find_all(data, prefix).take_while(|&i| i <= self.search_ceiling) {
                let limit = start.saturating_add(self.lexical_extent).min(data.len());
                let end = data[start..limit]
                    .iter()
                    .position(|&b| !is_printable(b))
                    .map_or(limit, |p| start + p);

                if end - start <= MIN_VERSION_LEN {
                    continue;
                }

                let candidate = String::from_utf8_lossy(&data[start..end]);
                if is_valid_unity_version(&candidate) {
                    return Some(VersionMatch {
                        version: candidate.into_owned(),
                        tier: MatchTier::Lexical,
                        offset: start,
                    });
                }
            }
        }
        None
    }

    fn match_patterns(chunk: &[u8]) -> Option<(String, usize)> {
        for pattern in VERSION_PATTERNS.iter() {
            for caps in pattern.captures_iter(chunk) {
                let Some(group) = caps.get(1) else {
                    continue;
                };
                let candidate = String::from_utf8_lossy(group.as_bytes());
                if is_valid_unity_version(&candidate) {
                    return Some((candidate.into_owned(), group.start()));
                }
            }
        }
        None
    }
}

impl Default for VersionMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn is_printable(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}
