// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ANCHOR_LIMIT: usize = 10;
pub const DEFAULT_WINDOW_BEFORE: usize = 50;
pub const DEFAULT_WINDOW_AFTER: usize = 200;
pub const DEFAULT_SEARCH_CEILING: usize = 500_000;
pub const DEFAULT_LEXICAL_EXTENT: usize = 30;
pub const MAX_DEEP_SCAN_ENTRIES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub anchor_limit: usize,
    pub window_before: usize,
    pub window_after: usize,
    pub search_ceiling: usize,
    pub lexical_extent: usize,
    pub deep_scan_limit: usize,
    pub pacing_ms: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            anchor_limit: DEFAULT_ANCHOR_LIMIT,
            window_before: DEFAULT_WINDOW_BEFORE,
            window_after: DEFAULT_WINDOW_AFTER,
            search_ceiling: DEFAULT_SEARCH_CEILING,
            lexical_extent: DEFAULT_LEXICAL_EXTENT,
            deep_scan_limit: MAX_DEEP_SCAN_ENTRIES,
            pacing_ms: 0,
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing_ms = pacing.as_millis() as u64;
        self
    }

    pub fn with_deep_scan_limit(mut self, limit: usize) -> Self {
        self.deep_scan_limit = limit;
        self
    }

    pub fn with_search_ceiling(mut self, ceiling: usize) -> Self {
        self.search_ceiling = ceiling;
        self
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.anchor_limit == 0 {
            return Err("anchor_limit must be greater than 0".to_string());
        }
        if self.search_ceiling == 0 {
            return Err("search_ceiling must be greater than 0".to_string());
        }
        if self.lexical_extent == 0 {
            return Err("lexical_extent must be greater than 0".to_string());
        }
        if self.deep_scan_limit > MAX_DEEP_SCAN_ENTRIES {
            return Err(format!("deep_scan_limit must not exceed {}", MAX_DEEP_SCAN_ENTRIES));
        }
        Ok(())
    }
}
