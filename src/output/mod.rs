// Sat Oct 17 2026 - Alex

pub mod json;

pub use json::{JsonError, JsonSerializer};

use crate::error::ExtractError;
use crate::extractor::EngineProbe;
use crate::result::ExtractionResult;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveReport {
    pub path: PathBuf,
    pub result: ExtractionResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub tool: &'static str,
    pub version: &'static str,
    pub archives: Vec<ArchiveReport>,
}

impl ScanReport {
    pub fn new(results: Vec<(PathBuf, ExtractionResult)>) -> Self {
        Self {
            tool: TOOL_NAME,
            version: TOOL_VERSION,
            archives: results
                .into_iter()
                .map(|(path, result)| ArchiveReport { path, result })
                .collect(),
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.archives.iter().all(|a| a.result.success)
    }

    pub fn found_count(&self) -> usize {
        self.archives.iter().filter(|a| a.result.success).count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<EngineProbe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ExtractError>,
}

impl ProbeReport {
    pub fn new(path: &Path, outcome: Result<EngineProbe, ExtractError>) -> Self {
        let (probe, error) = match outcome {
            Ok(probe) => (Some(probe), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            path: path.to_path_buf(),
            probe,
            error,
        }
    }

    pub fn is_target_engine(&self) -> bool {
        self.probe.as_ref().map_or(false, |p| p.is_target_engine)
    }
}
