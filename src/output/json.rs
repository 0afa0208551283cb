// Sat Oct 17 2026 - Alex

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, JsonError> {
        let json = if self.pretty_print {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    pub fn serialize_to_file<T: Serialize, P: AsRef<Path>>(&self, value: &T, path: P) -> Result<(), JsonError> {
        let json = self.serialize(value)?;
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}
