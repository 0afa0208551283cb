// Thu Oct 15 2026 - Alex

pub mod archive;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod output;
pub mod progress;
pub mod result;
pub mod scan;
pub mod ui;
pub mod version;

#[cfg(test)]
mod testing;

pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extractor::{EngineProbe, UnityVersionExtractor};
pub use progress::{ProgressEvent, ProgressSink, ProgressStage};
pub use result::ExtractionResult;
pub use version::MatchTier;
