/// Whole-catalog entry extraction (push path)
use super::line::CatalogLine;
use super::Entry;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Extract every translatable entry from a catalog, in source order.
///
/// Fields accumulate into the current entry until one repeats, which
/// signals the start of the next entry. Entries whose values are all
/// empty (the header block) are discarded.
pub fn extract_entries<R: BufRead>(reader: R) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut entry = Entry::new();

    for line in reader.lines() {
        let line = line?;
        if let CatalogLine::EntryField { field, value } = CatalogLine::classify(line.trim()) {
            if entry.contains(&field) {
                if entry.has_content() {
                    entries.push(entry);
                }
                entry = Entry::new();
            }
            entry.insert(field, value);
        }
    }

    if entry.has_content() {
        entries.push(entry);
    }

    Ok(entries)
}

/// Read a catalog file and extract its entries.
pub fn extract_entries_from_file(path: &Path) -> io::Result<Vec<Entry>> {
    info!("Reading file {}...", path.display());
    let entries = extract_entries(BufReader::new(File::open(path)?))?;
    info!("Read {} entries!", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CATALOG: &str = "\
# Translator comment
msgid \"\"
msgstr \"\"
\"Language: pt-BR\\n\"
\"Content-Type: text/plain; charset=UTF-8\\n\"

#: src/main.c:10
msgid \"Hello\"
msgstr \"Olá\"

msgid \"Bye\"
msgstr \"Tchau\"
";

    #[test]
    fn extracts_entries_and_drops_header() {
        let entries = extract_entries(Cursor::new(CATALOG)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].get("msgid"), Some("Hello"));
        assert_eq!(entries[0].get("msgstr"), Some("Olá"));
        assert_eq!(entries[1].get("msgid"), Some("Bye"));
        assert_eq!(entries[1].get("msgstr"), Some("Tchau"));
    }

    #[test]
    fn repeated_field_starts_a_new_entry() {
        let input = "msgid \"a\"\nmsgstr \"b\"\nmsgid \"c\"\nmsgstr \"d\"\n";
        let entries = extract_entries(Cursor::new(input)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].get("msgid"), Some("c"));
    }

    #[test]
    fn plural_fields_stay_in_one_entry() {
        let input = "\
msgid \"One file\"
msgid_plural \"{n} files\"
msgstr[0] \"Um arquivo\"
msgstr[1] \"{n} arquivos\"
";
        let entries = extract_entries(Cursor::new(input)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].get("msgid_plural"), Some("{n} files"));
        assert_eq!(entries[0].get("msgstr[1]"), Some("{n} arquivos"));
    }

    #[test]
    fn trailing_all_empty_entry_is_discarded() {
        let input = "msgid \"a\"\nmsgstr \"b\"\nmsgid \"\"\nmsgstr \"\"\n";
        let entries = extract_entries(Cursor::new(input)).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn empty_catalog_yields_no_entries() {
        let entries = extract_entries(Cursor::new("")).unwrap();
        assert!(entries.is_empty());
    }
}
