// Thu Oct 15 2026 - Alex

pub mod detector;
pub mod targets;

pub use detector::EngineDetector;
pub use targets::{TargetEntry, ASSET_DATA_PREFIX, ENGINE_INDICATORS, TARGET_ENTRIES};
