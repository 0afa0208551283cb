// Thu Oct 15 2026 - Alex

use crate::archive::container::check_signature;
use crate::archive::EntryReader;
use crate::error::ExtractError;
use indexmap::IndexSet;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

// Cap on the up-front allocation; the declared size comes from untrusted headers.
const MAX_PREALLOC: u64 = 64 * 1024 * 1024;

pub struct ApkArchive<R: Read + Seek> {
    archive: ZipArchive<R>,
    names: IndexSet<String>,
}

impl ApkArchive<BufReader<File>> {
    /// Opens `path`, checks the container signature and parses the central directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let reader = Self::validate(path)?;
        Self::new(reader)
    }

    /// Opens `path` and checks only the container signature.
    pub fn validate<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, ExtractError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ExtractError::from_open_error(e, path))?;
        let metadata = file.metadata().map_err(|e| ExtractError::from_open_error(e, path))?;
        if metadata.is_dir() {
            return Err(ExtractError::InvalidArchive(format!("{} is a directory", path.display())));
        }
        let mut reader = BufReader::new(file);
        let kind = check_signature(&mut reader)?;
        debug!("{} carries a {:?} signature", path.display(), kind);
        Ok(reader)
    }
}

impl<R: Read + Seek> ApkArchive<R> {
    /// Parses the central directory of an already validated container.
    pub fn new(reader: R) -> Result<Self, ExtractError> {
        let mut archive = ZipArchive::new(reader).map_err(|e| ExtractError::Corrupted(e.to_string()))?;

        let mut names = IndexSet::with_capacity(archive.len());
        for index in 0..archive.len() {
            let entry = archive
                .by_index_raw(index)
                .map_err(|e| ExtractError::Corrupted(format!("entry {}: {}", index, e)))?;
            names.insert(entry.name().to_string());
        }

        debug!("Central directory lists {} entries", names.len());

        Ok(Self { archive, names })
    }

    pub fn from_reader(mut reader: R) -> Result<Self, ExtractError> {
        check_signature(&mut reader)?;
        Self::new(reader)
    }
}

impl<R: Read + Seek> EntryReader for ApkArchive<R> {
    fn entry_names(&self) -> &IndexSet<String> {
        &self.names
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ExtractError> {
        let mut entry = self
            .archive
            .by_name(name)
            .map_err(|e| ExtractError::read_failure(name, e))?;

        let mut data = Vec::with_capacity(entry.size().min(MAX_PREALLOC) as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|e| ExtractError::read_failure(name, e))?;

        debug!("Read {} ({} bytes)", name, data.len());
        Ok(data)
    }
}
