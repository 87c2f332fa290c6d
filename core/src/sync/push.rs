/// Push driver: local catalogs into the sheet
use super::{run_metadata, SyncError};
use crate::catalog::extract::extract_entries_from_file;
use crate::catalog::Entry;
use crate::config::{ColumnSpec, LocaleSettings, SyncConfig};
use crate::locale::locale_from_path;
use crate::sheet::range::{column_letters, range_name};
use crate::sheet::{Row, SheetService};
use crate::template::Template;
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::path::PathBuf;

/// Send entry data from every catalog under the configured path to the
/// spreadsheet, one update request per file.
///
/// Files of one locale append sequentially into the same sheet region:
/// the row offset starts at the locale's configured value and advances
/// by the updated-row count of each request. The header row goes out
/// with the first file of each locale only.
pub fn push(
    service: &dyn SheetService,
    config: &SyncConfig,
    files: &[PathBuf],
) -> Result<(), SyncError> {
    let mut locale_row_offsets: HashMap<String, usize> = HashMap::new();

    for path in files {
        let locale = match locale_from_path(path) {
            Ok(locale) => locale,
            Err(err) => {
                error!("{err}");
                continue;
            }
        };
        info!("File {} is from locale {}", path.display(), locale);

        let Some(settings) = config.locales.get(&locale) else {
            warn!("Missing configuration for this locale, skipping...");
            continue;
        };

        let entries = extract_entries_from_file(path)?;
        if entries.is_empty() {
            warn!("No entries found in this file, no changes were pushed.");
            continue;
        }

        let print_header = !locale_row_offsets.contains_key(&locale);
        let row_offset = locale_row_offsets
            .get(&locale)
            .copied()
            .unwrap_or(settings.row_offset);
        let metadata = run_metadata(path, &locale);

        let (range, rows) = build_request(settings, &entries, row_offset, print_header, &metadata);
        debug!("Body: {:?}", rows);

        let updated = service.update(&range, &rows)?;
        info!("Updated {} rows successfully.", updated);
        locale_row_offsets.insert(locale, row_offset + updated);
    }

    Ok(())
}

/// Compute the target range and row values for one file's entries.
fn build_request(
    settings: &LocaleSettings,
    entries: &[Entry],
    row_offset: usize,
    print_header: bool,
    metadata: &HashMap<String, String>,
) -> (String, Vec<Row>) {
    let row_start = 1 + row_offset;
    let row_end = row_start + entries.len() - 1 + usize::from(print_header);
    let column_start = column_letters(1 + settings.column_offset);
    let column_end = column_letters(settings.column_offset + settings.columns.len());
    let range = range_name(&settings.sheet, row_start, row_end, &column_start, &column_end);

    let mut rows = Vec::with_capacity(entries.len() + 1);
    if print_header {
        rows.push(
            settings
                .columns
                .iter()
                .map(|column| column.header.clone())
                .collect(),
        );
    }
    for entry in entries {
        rows.push(
            settings
                .columns
                .iter()
                .map(|column| populate_column(column, entry, metadata))
                .collect(),
        );
    }

    (range, rows)
}

/// The cell value of one column for one entry: the rendered static
/// template, or the first of the column's fields the entry carries.
fn populate_column(
    column: &ColumnSpec,
    entry: &Entry,
    metadata: &HashMap<String, String>,
) -> String {
    if let Some(text) = &column.static_text {
        return Template::compile(text).render(metadata);
    }
    column
        .fields
        .iter()
        .find_map(|field| entry.get(field))
        .unwrap_or_default()
        .to_string()
}
