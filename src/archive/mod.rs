// Thu Oct 15 2026 - Alex

pub mod container;
pub mod reader;
pub mod traits;

pub use container::{check_signature, ContainerKind};
pub use reader::ApkArchive;
pub use traits::EntryReader;
