pub mod catalog;
pub mod config;
pub mod locale;
pub mod scanner;
pub mod sheet;
pub mod sync;
pub mod template;

#[cfg(test)]
mod integration_tests;

pub use catalog::{CatalogError, CursorPair, Entry};
pub use config::{ColumnSpec, ConfigError, LocaleSettings, SyncConfig};
pub use locale::{locale_from_path, LocaleError};
pub use scanner::find_catalog_files;
pub use sheet::{GoogleSheets, Row, SheetError, SheetService};
pub use sync::{pull, push, SyncError};
pub use template::{Template, TemplateError};
