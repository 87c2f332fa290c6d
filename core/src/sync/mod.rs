/// Push/pull sync drivers
pub mod pull;
pub mod push;

use crate::catalog::CatalogError;
use crate::config::{ConfigError, SyncConfig};
use crate::locale::locale_from_path;
use crate::sheet::columns::ColumnMapping;
use crate::sheet::SheetError;
use crate::template::TemplateError;
use chrono::Local;
use log::{error, info};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use pull::pull;
pub use push::push;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("sheet row references unknown catalog file {0:?}")]
    UnknownFile(String),
}

/// Fail the run up front when any configured locale's column layout is
/// unusable, before any sheet I/O happens.
pub(crate) fn validate_column_layouts(config: &SyncConfig) -> Result<(), ConfigError> {
    for settings in config.locales.values() {
        ColumnMapping::build(&settings.columns)?;
    }
    Ok(())
}

/// Metadata available to static-template placeholders for one file.
pub(crate) fn run_metadata(path: &Path, locale: &str) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert("file_name".to_string(), base_name(path));
    metadata.insert("locale".to_string(), locale.to_string());
    metadata.insert(
        "timestamp".to_string(),
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    metadata
}

pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Group catalog paths by locale, then by base file name. Files whose
/// locale cannot be derived are reported and left out; the run
/// continues without them.
pub(crate) fn group_by_locale(files: &[PathBuf]) -> HashMap<String, HashMap<String, PathBuf>> {
    let mut groups: HashMap<String, HashMap<String, PathBuf>> = HashMap::new();

    for path in files {
        let locale = match locale_from_path(path) {
            Ok(locale) => locale,
            Err(err) => {
                error!("{err}");
                continue;
            }
        };
        info!("File {} is from locale {}", path.display(), locale);
        groups
            .entry(locale)
            .or_default()
            .insert(base_name(path), path.clone());
    }

    groups
}
