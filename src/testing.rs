// Sat Oct 17 2026 - Alex

use crate::archive::{ApkArchive, EntryReader};
use crate::error::ExtractError;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

enum FixtureEntry {
    File(String, Vec<u8>),
    Directory(String),
}

/// Builds small zip archives for tests.
pub struct ApkBuilder {
    entries: Vec<FixtureEntry>,
}

impl ApkBuilder {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn entry(mut self, name: &str, data: &[u8]) -> Self {
        self.entries.push(FixtureEntry::File(name.to_string(), data.to_vec()));
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        self.entries.push(FixtureEntry::Directory(name.to_string()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for entry in &self.entries {
            match entry {
                FixtureEntry::File(name, data) => {
                    zip.start_file(name.as_str(), options).unwrap();
                    zip.write_all(data).unwrap();
                }
                FixtureEntry::Directory(name) => {
                    zip.add_directory(name.as_str(), options).unwrap();
                }
            }
        }

        zip.finish().unwrap().into_inner()
    }

    pub fn archive(&self) -> ApkArchive<Cursor<Vec<u8>>> {
        ApkArchive::new(Cursor::new(self.build())).unwrap()
    }

    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

/// In-memory entry source that records every read and can fail chosen entries.
pub struct MemoryArchive {
    names: IndexSet<String>,
    data: HashMap<String, Vec<u8>>,
    failing: HashSet<String>,
    pub reads: Vec<String>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self {
            names: IndexSet::new(),
            data: HashMap::new(),
            failing: HashSet::new(),
            reads: Vec::new(),
        }
    }

    pub fn with_entry(mut self, name: &str, data: &[u8]) -> Self {
        self.names.insert(name.to_string());
        self.data.insert(name.to_string(), data.to_vec());
        self
    }

    pub fn with_failing_entry(mut self, name: &str) -> Self {
        self.names.insert(name.to_string());
        self.failing.insert(name.to_string());
        self
    }
}

impl EntryReader for MemoryArchive {
    fn entry_names(&self) -> &IndexSet<String> {
        &self.names
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ExtractError> {
        self.reads.push(name.to_string());
        if self.failing.contains(name) {
            return Err(ExtractError::read_failure(name, "invalid checksum"));
        }
        self.data
            .get(name)
            .cloned()
            .ok_or_else(|| ExtractError::read_failure(name, "entry not found"))
    }
}

/// Noise bytes with no marker, no dotted numbers and no version prefixes.
pub fn noise(len: usize) -> Vec<u8> {
    (0..len).map(|i| [0x00, 0xAB, b'x', 0xFF, b'q', 0x01][i % 6]).collect()
}

pub fn with_payload(payload: &[u8], padding: usize) -> Vec<u8> {
    let mut data = noise(padding);
    data.extend_from_slice(payload);
    data.extend_from_slice(&noise(padding));
    data
}
