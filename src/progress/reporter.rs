// Thu Oct 15 2026 - Alex

use crate::progress::{ProgressEvent, ProgressSink, ProgressStage};
use std::thread;
use std::time::Duration;

pub const VALIDATING_PERCENT: u8 = 5;
pub const OPENING_PERCENT: u8 = 10;
pub const ENGINE_CHECK_PERCENT: u8 = 15;
pub const STRUCTURE_SCAN_PERCENT: u8 = 25;
pub const TARGET_SCAN_START: u8 = 30;
pub const TARGET_SCAN_SPAN: u8 = 40;
pub const PARSING_OFFSET: u8 = 5;
pub const DEEP_SCAN_START: u8 = 75;
pub const DEEP_SCAN_SPAN: u8 = 20;
pub const FINAL_PERCENT: u8 = 100;

/// Percent for the `index`-th present priority target out of `total`.
pub fn target_percent(index: usize, total: usize) -> u8 {
    TARGET_SCAN_START + scaled(index, total, TARGET_SCAN_SPAN)
}

/// Percent for the `index`-th deep-scanned entry out of `total`.
pub fn deep_scan_percent(index: usize, total: usize) -> u8 {
    DEEP_SCAN_START + scaled(index, total, DEEP_SCAN_SPAN)
}

fn scaled(index: usize, total: usize, span: u8) -> u8 {
    let total = total.max(1);
    ((index.min(total) * span as usize) / total) as u8
}

/// Emits events to an optional sink, with an optional pause after each one.
pub struct Reporter<'a> {
    sink: Option<&'a mut dyn ProgressSink>,
    pacing: Duration,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: Option<&'a mut dyn ProgressSink>, pacing: Duration) -> Self {
        Self { sink, pacing }
    }

    pub fn silent() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn emit(&mut self, stage: ProgressStage, message: impl Into<String>, percent: u8, entry_name: Option<&str>) {
        if let Some(sink) = self.sink.as_mut() {
            let event = ProgressEvent {
                stage,
                message: message.into(),
                percent: percent.min(FINAL_PERCENT),
                entry_name: entry_name.map(str::to_string),
            };
            sink.on_progress(&event);
        }

        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
    }
}
