// Thu Oct 15 2026 - Alex

pub mod deep;
pub mod priority;

pub use deep::DeepScanner;
pub use priority::{PriorityOutcome, PriorityScanner};

use crate::version::{MatchTier, VersionMatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionHit {
    pub version: String,
    pub source_entry: String,
    pub tier: MatchTier,
    pub offset: usize,
}

impl VersionHit {
    pub(crate) fn new(found: VersionMatch, source_entry: &str) -> Self {
        Self {
            version: found.version,
            source_entry: source_entry.to_string(),
            tier: found.tier,
            offset: found.offset,
        }
    }
}
