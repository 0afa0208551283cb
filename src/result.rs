// Thu Oct 15 2026 - Alex

use crate::error::ExtractError;
use crate::version::MatchTier;
use serde::Serialize;

/// Outcome of one extraction. `version`, `source_entry` and `tier` are only set
/// on success; `error` only on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub success: bool,
    pub version: Option<String>,
    pub source_entry: Option<String>,
    pub is_target_engine: bool,
    pub error: Option<ExtractError>,
    pub details: Vec<String>,
    pub tier: Option<MatchTier>,
}

impl ExtractionResult {
    pub(crate) fn pending() -> Self {
        Self {
            success: false,
            version: None,
            source_entry: None,
            is_target_engine: false,
            error: None,
            details: Vec::new(),
            tier: None,
        }
    }

    pub fn failed(error: ExtractError) -> Self {
        Self::pending().fail(error)
    }

    pub(crate) fn fail(mut self, error: ExtractError) -> Self {
        self.success = false;
        self.version = None;
        self.source_entry = None;
        self.tier = None;
        self.error = Some(error);
        self
    }

    pub(crate) fn found(mut self, version: String, source_entry: &str, tier: MatchTier) -> Self {
        self.success = true;
        self.version = Some(version);
        self.source_entry = Some(source_entry.to_string());
        self.tier = Some(tier);
        self.error = None;
        self
    }

    pub(crate) fn note(&mut self, detail: impl Into<String>) {
        self.details.push(detail.into());
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Engine confirmed but no version string survived every tier.
    pub fn is_undetermined(&self) -> bool {
        matches!(self.error, Some(ExtractError::VersionUndetermined))
    }
}
