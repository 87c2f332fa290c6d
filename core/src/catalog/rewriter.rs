/// Entry rewriting against an output cursor
use super::line::CatalogLine;
use super::CatalogError;
use crate::sheet::columns::ColumnMapping;
use log::debug;
use std::io::{BufRead, Seek, SeekFrom, Write};

/// Replacement values for one entry: a sheet row plus the mapping that
/// says which cell holds which field.
#[derive(Debug, Clone, Copy)]
pub struct RowUpdate<'a> {
    row: &'a [String],
    mapping: &'a ColumnMapping,
}

impl<'a> RowUpdate<'a> {
    pub fn new(row: &'a [String], mapping: &'a ColumnMapping) -> Self {
        Self { row, mapping }
    }

    /// The replacement value for `field`, if the mapping knows it. A
    /// mapped cell beyond the row's length reads as empty (the sheet
    /// API omits trailing empty cells).
    fn value_for(&self, field: &str) -> Option<&'a str> {
        let index = self.mapping.field_column(field)?;
        Some(self.row.get(index).map(String::as_str).unwrap_or(""))
    }
}

/// Write the context lines that precede an entry, verbatim.
pub fn copy_context<W: Write>(writer: &mut W, context: &[String]) -> Result<(), CatalogError> {
    for line in context {
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Consume one entry from `reader` (which must sit at the entry's first
/// line, post-locate) and emit it to `writer`.
///
/// Field lines take their new value from `update` when the field is
/// mapped, and are copied verbatim otherwise (`update = None` copies
/// the whole entry, used for the header bootstrap). Continuation
/// strings are always copied verbatim; the first line that is neither
/// ends the entry and is pushed back for the next locate call.
pub fn rewrite_entry<R, W>(
    reader: &mut R,
    writer: &mut W,
    update: Option<RowUpdate<'_>>,
) -> Result<(), CatalogError>
where
    R: BufRead + Seek,
    W: Write,
{
    let mut line = String::new();

    loop {
        let line_start = reader.stream_position()?;
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        match CatalogLine::classify(&line) {
            CatalogLine::EntryField { field, .. } => {
                match update.and_then(|u| u.value_for(&field)) {
                    Some(value) => {
                        debug!("Updating field {}...", field);
                        writeln!(writer, "{} \"{}\"", field, value)?;
                    }
                    None => writer.write_all(line.as_bytes())?,
                }
            }
            CatalogLine::ContinuationString { .. } => {
                writer.write_all(line.as_bytes())?;
            }
            CatalogLine::Other => {
                reader.seek(SeekFrom::Start(line_start))?;
                break;
            }
        }
    }

    Ok(())
}
