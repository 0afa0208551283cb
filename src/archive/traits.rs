// Thu Oct 15 2026 - Alex

use crate::error::ExtractError;
use indexmap::IndexSet;

/// Name listing and on-demand whole-entry reads over an opened archive.
pub trait EntryReader {
    /// Entry names in central directory order.
    fn entry_names(&self) -> &IndexSet<String>;

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ExtractError>;

    fn contains(&self, name: &str) -> bool {
        self.entry_names().contains(name)
    }

    fn len(&self) -> usize {
        self.entry_names().len()
    }

    fn is_empty(&self) -> bool {
        self.entry_names().is_empty()
    }
}
