// Thu Oct 15 2026 - Alex

use crate::error::ExtractError;
use std::io::{self, Read, Seek};

const LOCAL_HEADER: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
const END_OF_DIRECTORY: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Zip,
    EmptyZip,
}

pub fn detect_container(header: &[u8]) -> Option<ContainerKind> {
    match header {
        [0x50, 0x4B, 0x03, 0x04, ..] => Some(ContainerKind::Zip),
        [0x50, 0x4B, 0x05, 0x06, ..] => Some(ContainerKind::EmptyZip),
        _ => None,
    }
}

/// Reads the leading signature and rewinds, so the caller can hand the same
/// reader to the zip parser.
pub fn check_signature<R: Read + Seek>(reader: &mut R) -> Result<ContainerKind, ExtractError> {
    let mut header = [0u8; 4];
    if let Err(e) = reader.read_exact(&mut header) {
        return Err(match e.kind() {
            io::ErrorKind::UnexpectedEof => ExtractError::InvalidArchive("file is too short".to_string()),
            io::ErrorKind::PermissionDenied => ExtractError::PermissionDenied(e.to_string()),
            _ => ExtractError::Unexpected(e.to_string()),
        });
    }
    reader.rewind().map_err(|e| ExtractError::Unexpected(e.to_string()))?;

    detect_container(&header).ok_or_else(|| {
        ExtractError::InvalidArchive(format!(
            "unrecognized signature {:02X} {:02X} {:02X} {:02X}",
            header[0], header[1], header[2], header[3]
        ))
    })
}
