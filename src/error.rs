// Thu Oct 15 2026 - Alex

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Invalid APK file (not a valid ZIP archive): {0}")]
    InvalidArchive(String),
    #[error("Corrupted APK file: {0}")]
    Corrupted(String),
    #[error("Permission denied - cannot access the file")]
    PermissionDenied(String),
    #[error("This APK does not appear to be a Unity game")]
    NotTargetEngine,
    #[error("Could not read {entry}: {reason}")]
    ReadFailure { entry: String, reason: String },
    #[error("Unity version could not be determined (file may be obfuscated)")]
    VersionUndetermined,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ExtractError {
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::InvalidArchive(_) => "invalid_archive",
            ExtractError::Corrupted(_) => "corrupted",
            ExtractError::PermissionDenied(_) => "permission_denied",
            ExtractError::NotTargetEngine => "not_target_engine",
            ExtractError::ReadFailure { .. } => "read_failure",
            ExtractError::VersionUndetermined => "version_undetermined",
            ExtractError::Unexpected(_) => "unexpected",
        }
    }

    /// Container-level failures end the invocation before any entry is inspected.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExtractError::InvalidArchive(_)
                | ExtractError::Corrupted(_)
                | ExtractError::PermissionDenied(_)
                | ExtractError::Unexpected(_)
        )
    }

    pub fn from_open_error(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ExtractError::PermissionDenied(path.display().to_string()),
            io::ErrorKind::NotFound => ExtractError::InvalidArchive(format!("{} does not exist", path.display())),
            io::ErrorKind::UnexpectedEof => ExtractError::InvalidArchive("file is too short".to_string()),
            _ => ExtractError::Unexpected(err.to_string()),
        }
    }

    pub fn read_failure(entry: &str, reason: impl ToString) -> Self {
        ExtractError::ReadFailure {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Serialize for ExtractError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtractError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
