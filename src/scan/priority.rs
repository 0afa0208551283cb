// Thu Oct 15 2026 - Alex

use crate::archive::EntryReader;
use crate::engine::targets::{present_targets, TargetEntry};
use crate::error::ExtractError;
use crate::progress::reporter::{target_percent, PARSING_OFFSET};
use crate::progress::{ProgressStage, Reporter};
use crate::scan::VersionHit;
use crate::version::VersionMatcher;
use log::{debug, warn};

#[derive(Debug, Default)]
pub struct PriorityOutcome {
    pub hit: Option<VersionHit>,
    pub warnings: Vec<String>,
}

pub struct PriorityScanner<'m> {
    matcher: &'m VersionMatcher,
}

impl<'m> PriorityScanner<'m> {
    pub fn new(matcher: &'m VersionMatcher) -> Self {
        Self { matcher }
    }

    /// Visits the present targets in table order and stops at the first
    /// validated version. Unreadable targets become warnings.
    pub fn scan<E>(&self, reader: &mut E, reporter: &mut Reporter<'_>) -> PriorityOutcome
    where
        E: EntryReader + ?Sized,
    {
        let targets: Vec<&'static TargetEntry> = present_targets(reader.entry_names()).collect();
        let total = targets.len();
        let mut outcome = PriorityOutcome::default();

        debug!("{} of {} priority targets present", total, crate::engine::TARGET_ENTRIES.len());

        for (index, target) in targets.into_iter().enumerate() {
            let percent = target_percent(index, total);

            reporter.emit(
                ProgressStage::Extracting,
                format!("Extracting {}...", target.label),
                percent,
                Some(target.label),
            );

            let data = match reader.read_entry(target.path) {
                Ok(data) => data,
                Err(err) => {
                    let warning = read_warning(target, err);
                    warn!("{}", warning);
                    outcome.warnings.push(warning);
                    continue;
                }
            };

            reporter.emit(
                ProgressStage::Parsing,
                format!("Parsing {}...", target.label),
                percent + PARSING_OFFSET,
                Some(target.label),
            );

            if let Some(found) = self.matcher.find(&data) {
                debug!("{} yielded {} via {} search", target.path, found.version, found.tier);
                outcome.hit = Some(VersionHit::new(found, target.path));
                break;
            }
        }

        outcome
    }
}

fn read_warning(target: &TargetEntry, err: ExtractError) -> String {
    let reason = match err {
        ExtractError::ReadFailure { reason, .. } => reason,
        other => other.to_string(),
    };
    ExtractError::read_failure(target.label, reason).to_string()
}
