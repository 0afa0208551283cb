// Sat Oct 17 2026 - Alex

use crate::progress::{ProgressEvent, ProgressSink};
use crate::result::ExtractionResult;
use indicatif::ProgressBar;

/// Renders extraction progress events onto an indicatif bar.
pub struct BarSink {
    bar: ProgressBar,
}

impl BarSink {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self, result: &ExtractionResult) {
        match (&result.version, result.error_message()) {
            (Some(version), _) => self.bar.finish_with_message(format!("Unity {}", version)),
            (None, Some(message)) => self.bar.abandon_with_message(message),
            (None, None) => self.bar.finish_and_clear(),
        }
    }
}

impl ProgressSink for BarSink {
    fn on_progress(&mut self, event: &ProgressEvent) {
        self.bar.set_position(u64::from(event.percent));
        self.bar.set_message(event.message.clone());
    }
}
