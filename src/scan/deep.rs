// Thu Oct 15 2026 - Alex

use crate::archive::EntryReader;
use crate::config::MAX_DEEP_SCAN_ENTRIES;
use crate::engine::ASSET_DATA_PREFIX;
use crate::progress::reporter::{deep_scan_percent, DEEP_SCAN_START};
use crate::progress::{ProgressStage, Reporter};
use crate::scan::VersionHit;
use crate::version::VersionMatcher;
use indexmap::IndexSet;
use log::{debug, trace};

pub struct DeepScanner<'m> {
    matcher: &'m VersionMatcher,
    limit: usize,
}

impl<'m> DeepScanner<'m> {
    pub fn new(matcher: &'m VersionMatcher) -> Self {
        Self {
            matcher,
            limit: MAX_DEEP_SCAN_ENTRIES,
        }
    }

    /// Lowers the entry cap. The cap never exceeds `MAX_DEEP_SCAN_ENTRIES`.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_DEEP_SCAN_ENTRIES);
        self
    }

    /// The first names under the asset data directory, in archive order, up to
    /// the configured limit. Directory entries and priority targets count
    /// towards the limit.
    pub fn candidates(&self, names: &IndexSet<String>) -> Vec<String> {
        names
            .iter()
            .filter(|name| name.starts_with(ASSET_DATA_PREFIX))
            .take(self.limit)
            .cloned()
            .collect()
    }

    pub fn scan<E>(&self, reader: &mut E, reporter: &mut Reporter<'_>) -> Option<VersionHit>
    where
        E: EntryReader + ?Sized,
    {
        reporter.emit(ProgressStage::DeepScan, "Deep scanning assets folder...", DEEP_SCAN_START, None);

        let candidates = self.candidates(reader.entry_names());
        let total = candidates.len();
        debug!("Deep scanning {} asset entries", total);

        for (index, name) in candidates.iter().enumerate() {
            let file_name = name.trim_end_matches('/').rsplit('/').next().unwrap_or(name);
            reporter.emit(
                ProgressStage::DeepScan,
                format!("Scanning {}...", file_name),
                deep_scan_percent(index, total),
                Some(file_name),
            );

            let data = match reader.read_entry(name) {
                Ok(data) => data,
                Err(err) => {
                    trace!("Skipping {}: {}", name, err);
                    continue;
                }
            };

            if let Some(found) = self.matcher.find(&data) {
                debug!("{} yielded {} via {} search", name, found.version, found.tier);
                return Some(VersionHit::new(found, name));
            }
        }

        None
    }
}
