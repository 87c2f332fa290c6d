/// Configuration for the catalog/spreadsheet sync
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "at least one of the columns must indicate the file name, \
         e.g. {{\"static\": \"{{file_name}}\", \"header\": \"FILE NAME\"}}"
    )]
    MissingFileNameColumn,

    #[error("pull requires a column mapped to the \"msgid\" field for locale {0}")]
    MissingMsgidColumn(String),
}

/// One spreadsheet column, either backed by catalog fields (the first
/// field present in an entry wins) or by a static template rendered
/// from run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,

    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_text: Option<String>,
}

/// Per-locale sheet placement and column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleSettings {
    pub sheet: String,
    pub row_offset: usize,
    pub column_offset: usize,
    pub columns: Vec<ColumnSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub spreadsheet_id: String,

    /// Root directory scanned recursively for .po catalogs.
    pub path: PathBuf,

    #[serde(default = "default_pull_chunk_size")]
    pub pull_chunk_size: usize,

    pub locales: HashMap<String, LocaleSettings>,
}

fn default_pull_chunk_size() -> usize {
    50
}

impl SyncConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "spreadsheet_id": "abc123",
        "path": "locales",
        "pull_chunk_size": 25,
        "locales": {
            "pt-BR": {
                "sheet": "Sheet1",
                "row_offset": 2,
                "column_offset": 1,
                "columns": [
                    {"header": "FILE", "static": "{file_name}"},
                    {"header": "SOURCE", "fields": ["msgid"]},
                    {"header": "TRANSLATION", "fields": ["msgstr", "msgstr[0]"]}
                ]
            }
        }
    }"#;

    #[test]
    fn parses_sample_config() {
        let config = SyncConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.spreadsheet_id, "abc123");
        assert_eq!(config.pull_chunk_size, 25);

        let settings = &config.locales["pt-BR"];
        assert_eq!(settings.sheet, "Sheet1");
        assert_eq!(settings.columns.len(), 3);
        assert_eq!(settings.columns[0].static_text.as_deref(), Some("{file_name}"));
        assert!(settings.columns[0].fields.is_empty());
        assert_eq!(settings.columns[2].fields, vec!["msgstr", "msgstr[0]"]);
    }

    #[test]
    fn chunk_size_defaults_when_absent() {
        let json = r#"{"spreadsheet_id": "x", "path": "p", "locales": {}}"#;
        let config = SyncConfig::from_json(json).unwrap();
        assert_eq!(config.pull_chunk_size, 50);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SyncConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
