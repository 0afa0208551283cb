// Thu Oct 15 2026 - Alex

pub mod matcher;
pub mod patterns;
pub mod validate;

pub use matcher::{MatchTier, VersionMatch, VersionMatcher};
pub use validate::is_valid_unity_version;
