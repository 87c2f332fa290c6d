/// Field-to-column mapping
use crate::config::{ColumnSpec, ConfigError};
use crate::template::Template;
use std::collections::HashMap;

/// Placeholder a static column must carry to identify the file-name
/// column.
pub const FILE_NAME_PLACEHOLDER: &str = "file_name";

/// Read-only mapping from catalog field names to 0-based column
/// indices, plus the reserved file-name column. Built once per locale
/// and reused across every chunk.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    indices: HashMap<String, usize>,
    file_name_column: usize,
}

impl ColumnMapping {
    /// Derive the mapping from the locale's column layout. Fails before
    /// any sheet I/O when no static column references `{file_name}`;
    /// when several do, the last one wins.
    pub fn build(columns: &[ColumnSpec]) -> Result<Self, ConfigError> {
        let mut indices = HashMap::new();
        let mut file_name_column = None;

        for (index, column) in columns.iter().enumerate() {
            if let Some(text) = &column.static_text {
                if Template::compile(text).has_placeholder(FILE_NAME_PLACEHOLDER) {
                    file_name_column = Some(index);
                }
                continue;
            }
            for field in &column.fields {
                indices.insert(field.clone(), index);
            }
        }

        Ok(Self {
            indices,
            file_name_column: file_name_column.ok_or(ConfigError::MissingFileNameColumn)?,
        })
    }

    pub fn field_column(&self, field: &str) -> Option<usize> {
        self.indices.get(field).copied()
    }

    pub fn file_name_column(&self) -> usize {
        self.file_name_column
    }
}
