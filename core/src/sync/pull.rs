/// Pull driver: sheet rows back into local catalogs
use super::{group_by_locale, validate_column_layouts, SyncError};
use crate::catalog::{CursorPair, RowUpdate};
use crate::config::{ConfigError, LocaleSettings, SyncConfig};
use crate::sheet::columns::{ColumnMapping, FILE_NAME_PLACEHOLDER};
use crate::sheet::range::{column_letters, range_name};
use crate::sheet::{Row, SheetService};
use crate::template::Template;
use log::{debug, info, warn};
use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::path::PathBuf;

/// Update local catalogs with data fetched from the spreadsheet.
///
/// Rows come down in fixed-size chunks until an empty chunk arrives.
/// Each non-blank row names its catalog through the file-name column
/// (reverse-extracted from the static template); that catalog's cursor
/// pair is opened on first touch and its entry located and rewritten.
/// Temp files are promoted over the originals only after every chunk
/// of a locale has been processed; a failed run promotes nothing.
pub fn pull(
    service: &dyn SheetService,
    config: &SyncConfig,
    files: &[PathBuf],
) -> Result<(), SyncError> {
    validate_column_layouts(config)?;

    let groups = group_by_locale(files);
    let mut locales: Vec<&String> = groups.keys().collect();
    locales.sort();

    for locale in locales {
        let Some(settings) = config.locales.get(locale) else {
            warn!("Missing configuration for locale {locale}, skipping...");
            continue;
        };
        info!("Handling pull for locale {}.", locale);
        pull_locale(service, config, locale, &groups[locale], settings)?;
    }

    Ok(())
}

fn pull_locale(
    service: &dyn SheetService,
    config: &SyncConfig,
    locale: &str,
    path_map: &HashMap<String, PathBuf>,
    settings: &LocaleSettings,
) -> Result<(), SyncError> {
    let mapping = ColumnMapping::build(&settings.columns)?;
    let msgid_column = mapping
        .field_column("msgid")
        .ok_or_else(|| ConfigError::MissingMsgidColumn(locale.to_string()))?;
    let file_name_template = Template::compile(
        settings.columns[mapping.file_name_column()]
            .static_text
            .as_deref()
            .unwrap_or_default(),
    );

    let mut pairs: HashMap<String, CursorPair> = HashMap::new();
    let outcome = fetch_chunks(
        service,
        config,
        settings,
        &mapping,
        msgid_column,
        &file_name_template,
        path_map,
        &mut pairs,
    );

    if let Err(err) = outcome {
        for pair in pairs.into_values() {
            pair.discard();
        }
        return Err(err);
    }

    info!("Finished processing. Closing file handles...");
    let mut pending = pairs.into_iter();
    while let Some((file_name, pair)) = pending.next() {
        if let Err(err) = pair.promote() {
            for (_, rest) in pending {
                rest.discard();
            }
            return Err(err.into());
        }
        info!("Closed file {}. Cleaning up...", file_name);
    }

    info!("All done!");
    Ok(())
}

/// Fetch row chunks until one comes back empty, applying every
/// non-blank row to its catalog.
#[allow(clippy::too_many_arguments)]
fn fetch_chunks(
    service: &dyn SheetService,
    config: &SyncConfig,
    settings: &LocaleSettings,
    mapping: &ColumnMapping,
    msgid_column: usize,
    file_name_template: &Template,
    path_map: &HashMap<String, PathBuf>,
    pairs: &mut HashMap<String, CursorPair>,
) -> Result<(), SyncError> {
    let column_start = column_letters(1 + settings.column_offset);
    let column_end = column_letters(settings.column_offset + settings.columns.len());
    // The first data row sits below the header row.
    let mut row_start = 1 + settings.row_offset + 1;

    loop {
        let row_end = row_start + config.pull_chunk_size - 1;
        let range = range_name(&settings.sheet, row_start, row_end, &column_start, &column_end);
        info!("Fetching chunk {}.", range);

        let rows = service.get(&range)?;
        debug!("{} rows retrieved.", rows.len());
        if rows.is_empty() {
            break;
        }

        for row in &rows {
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            apply_row(row, mapping, msgid_column, file_name_template, path_map, pairs)?;
        }

        row_start = row_end + 1;
    }

    Ok(())
}

fn apply_row(
    row: &Row,
    mapping: &ColumnMapping,
    msgid_column: usize,
    file_name_template: &Template,
    path_map: &HashMap<String, PathBuf>,
    pairs: &mut HashMap<String, CursorPair>,
) -> Result<(), SyncError> {
    let file_cell = row
        .get(mapping.file_name_column())
        .map(String::as_str)
        .unwrap_or("");
    let assigns = file_name_template.extract(file_cell)?;
    debug!("Extracted assigns: {:?}.", assigns);

    let file_name = assigns
        .get(FILE_NAME_PLACEHOLDER)
        .cloned()
        .unwrap_or_default();
    let target = path_map
        .get(&file_name)
        .ok_or_else(|| SyncError::UnknownFile(file_name.clone()))?;
    info!("Target file is {}.", target.display());

    let pair = match pairs.entry(file_name) {
        MapEntry::Occupied(slot) => slot.into_mut(),
        MapEntry::Vacant(slot) => slot.insert(CursorPair::open(target)?),
    };

    let msgid = row.get(msgid_column).map(String::as_str).unwrap_or("");
    let context = pair.locate(msgid)?;
    pair.rewrite(&context, RowUpdate::new(row, mapping))?;
    Ok(())
}
