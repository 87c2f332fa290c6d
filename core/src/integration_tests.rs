/// End-to-end flows: config parsing, discovery, push, pull
use crate::config::SyncConfig;
use crate::scanner::find_catalog_files;
use crate::sync::fake::FakeSheet;
use crate::sync::{pull, push};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CATALOG: &str = "\
msgid \"\"
msgstr \"\"
\"Language: pt-BR\\n\"

msgid \"Hello\"
msgstr \"Olá\"

msgid \"Bye\"
msgstr \"Tchau\"
";

fn write_catalog(root: &Path, locale: &str, name: &str) -> std::path::PathBuf {
    let dir = root.join(locale).join("LC_MESSAGES");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, CATALOG).unwrap();
    path
}

fn parse_config(root: &Path, columns: &str) -> SyncConfig {
    let json = format!(
        r#"{{
            "spreadsheet_id": "sheet-id",
            "path": {path:?},
            "pull_chunk_size": 10,
            "locales": {{
                "pt-BR": {{
                    "sheet": "Sheet1",
                    "row_offset": 5,
                    "column_offset": 0,
                    "columns": {columns}
                }}
            }}
        }}"#,
        path = root.to_string_lossy(),
    );
    SyncConfig::from_json(&json).unwrap()
}

#[test]
fn push_without_file_name_column_targets_expected_range() {
    let dir = tempdir().unwrap();
    write_catalog(dir.path(), "pt-BR", "app.po");

    let config = parse_config(
        dir.path(),
        r#"[
            {"header": "SOURCE", "fields": ["msgid"]},
            {"header": "TRANSLATION", "fields": ["msgstr"]}
        ]"#,
    );
    let files = find_catalog_files(&config.path).unwrap();

    let sheet = FakeSheet::default();
    push(&sheet, &config, &files).unwrap();

    let updates = sheet.updates.borrow();
    assert_eq!(updates.len(), 1);
    // Header plus two entries, offset 5: rows 6 through 8.
    assert_eq!(updates[0].0, "Sheet1!A6:B8");
    assert_eq!(updates[0].1[0], vec!["SOURCE", "TRANSLATION"]);
    assert_eq!(updates[0].1[1], vec!["Hello", "Olá"]);
    assert_eq!(updates[0].1[2], vec!["Bye", "Tchau"]);
}

#[test]
fn push_then_pull_round_trip_leaves_catalog_unchanged() {
    let dir = tempdir().unwrap();
    let path = write_catalog(dir.path(), "pt-BR", "app.po");

    let config = parse_config(
        dir.path(),
        r#"[
            {"header": "FILE", "static": "{file_name}"},
            {"header": "SOURCE", "fields": ["msgid"]},
            {"header": "TRANSLATION", "fields": ["msgstr"]}
        ]"#,
    );
    let files = find_catalog_files(&config.path).unwrap();

    let sheet = FakeSheet::default();
    push(&sheet, &config, &files).unwrap();

    // Feed the pushed data rows (header row excluded) back as the
    // single pull chunk.
    let data_rows: Vec<_> = sheet.updates.borrow()[0].1[1..].to_vec();
    let sheet = FakeSheet::with_chunks(vec![data_rows]);
    pull(&sheet, &config, &files).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), CATALOG);
    let backup = dir.path().join("pt-BR/LC_MESSAGES/app.po.old");
    assert_eq!(fs::read_to_string(backup).unwrap(), CATALOG);
}

#[test]
fn multiple_files_share_one_sheet_region() {
    let dir = tempdir().unwrap();
    write_catalog(dir.path(), "pt-BR", "a.po");
    write_catalog(dir.path(), "pt-BR", "b.po");

    let config = parse_config(
        dir.path(),
        r#"[
            {"header": "FILE", "static": "{file_name}"},
            {"header": "SOURCE", "fields": ["msgid"]},
            {"header": "TRANSLATION", "fields": ["msgstr"]}
        ]"#,
    );
    let files = find_catalog_files(&config.path).unwrap();

    let sheet = FakeSheet::default();
    push(&sheet, &config, &files).unwrap();

    let updates = sheet.updates.borrow();
    assert_eq!(updates.len(), 2);
    // a.po: header + 2 entries at rows 6..=8; b.po continues at row 9
    // with no header of its own.
    assert_eq!(updates[0].0, "Sheet1!A6:C8");
    assert_eq!(updates[1].0, "Sheet1!A9:C10");
    assert_eq!(updates[0].1[1][0], "a.po");
    assert_eq!(updates[1].1[0][0], "b.po");
}
