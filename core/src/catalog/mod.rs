/// Gettext catalog handling
///
/// The push path extracts whole entries in one pass; the pull path
/// streams through a catalog with a read/write cursor pair, rewriting
/// one located entry at a time without loading the file into memory.
pub mod cursor;
pub mod extract;
pub mod line;
pub mod locator;
pub mod rewriter;

use std::io;
use thiserror::Error;

pub use cursor::CursorPair;
pub use extract::extract_entries;
pub use line::CatalogLine;
pub use locator::locate_entry;
pub use rewriter::{copy_context, rewrite_entry, RowUpdate};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("msgid {msgid:?} was not found in the file")]
    EntryNotFound { msgid: String },
}

/// One translatable unit: the `msg*` fields of a contiguous field run,
/// in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    fields: Vec<(String, String)>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn insert(&mut self, field: String, value: String) {
        self.fields.push((field, value));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether any field carries a non-empty value. The catalog header
    /// (empty msgid, empty msgstr) has none and is not translatable.
    pub fn has_content(&self) -> bool {
        self.fields.iter().any(|(_, value)| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
