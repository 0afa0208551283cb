// Thu Oct 15 2026 - Alex

pub mod channel;
pub mod reporter;

pub use channel::{channel, ChannelSink};
pub use reporter::Reporter;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    Validating,
    Opening,
    CheckingEngine,
    ScanningFiles,
    Extracting,
    Parsing,
    DeepScan,
    Finalizing,
}

impl ProgressStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStage::Validating => "validating",
            ProgressStage::Opening => "opening",
            ProgressStage::CheckingEngine => "checking_engine",
            ProgressStage::ScanningFiles => "scanning_files",
            ProgressStage::Extracting => "extracting",
            ProgressStage::Parsing => "parsing",
            ProgressStage::DeepScan => "deep_scan",
            ProgressStage::Finalizing => "finalizing",
        }
    }
}

impl fmt::Display for ProgressStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    pub stage: ProgressStage,
    pub message: String,
    pub percent: u8,
    pub entry_name: Option<String>,
}

/// Receives progress events synchronously on the extracting thread.
///
/// Sinks observe only; nothing a sink does can change the extraction result.
pub trait ProgressSink {
    fn on_progress(&mut self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(&ProgressEvent),
{
    fn on_progress(&mut self, event: &ProgressEvent) {
        self(event)
    }
}
