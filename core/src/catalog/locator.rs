/// Entry lookup with one wraparound
use super::line::CatalogLine;
use super::CatalogError;
use log::{debug, info};
use std::io::{BufRead, Seek, SeekFrom};

/// Scan progress for one lookup. Reaching end-of-file while `Scanning`
/// restarts from the top; reaching it again while `WrappedOnce` means
/// the msgid does not exist in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    WrappedOnce,
}

/// Advance `reader` to the first line of the entry whose msgid equals
/// `msgid` (the empty string matches the header block), returning the
/// context lines that immediately precede it.
///
/// The context buffer holds comments and blank lines, not continuation
/// strings (those belong to the previous entry and are preserved by the
/// rewriter instead). Pull processes rows in catalog order, so the scan
/// starts wherever the cursor currently sits and wraps around the end
/// of the file at most once.
pub fn locate_entry<R: BufRead + Seek>(
    reader: &mut R,
    msgid: &str,
) -> Result<Vec<String>, CatalogError> {
    let mut state = ScanState::Scanning;
    let mut context: Vec<String> = Vec::new();
    let mut entry_start = 0u64;
    let mut in_entry = false;
    let mut line = String::new();

    info!("Looking for msgid {:?}.", msgid);
    loop {
        let line_start = reader.stream_position()?;
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            match state {
                ScanState::Scanning => {
                    debug!("EOF reached, restarting from beginning of file...");
                    state = ScanState::WrappedOnce;
                    context.clear();
                    in_entry = false;
                    reader.seek(SeekFrom::Start(0))?;
                    continue;
                }
                ScanState::WrappedOnce => {
                    return Err(CatalogError::EntryNotFound {
                        msgid: msgid.to_string(),
                    });
                }
            }
        }

        match CatalogLine::classify(&line) {
            CatalogLine::EntryField { field, value } => {
                if !in_entry {
                    in_entry = true;
                    entry_start = line_start;
                }
                if field == "msgid" && value == msgid {
                    reader.seek(SeekFrom::Start(entry_start))?;
                    debug!("Found entry at position {}.", entry_start);
                    return Ok(context);
                }
            }
            CatalogLine::ContinuationString { .. } => {
                if in_entry {
                    in_entry = false;
                    context.clear();
                }
            }
            CatalogLine::Other => {
                if in_entry {
                    in_entry = false;
                    context.clear();
                }
                context.push(line.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CATALOG: &str = "\
# header comment
msgid \"\"
msgstr \"\"
\"Language: en\\n\"

# first unit
msgid \"hello\"
msgstr \"olá\"

msgid \"bye\"
msgstr \"tchau\"
";

    #[test]
    fn finds_header_with_empty_msgid() {
        let mut reader = Cursor::new(CATALOG.as_bytes().to_vec());
        let context = locate_entry(&mut reader, "").unwrap();
        assert_eq!(context, vec!["# header comment\n".to_string()]);
        assert_eq!(reader.position(), "# header comment\n".len() as u64);
    }

    #[test]
    fn buffers_comments_but_not_continuation_strings() {
        let mut reader = Cursor::new(CATALOG.as_bytes().to_vec());
        let context = locate_entry(&mut reader, "hello").unwrap();
        assert_eq!(
            context,
            vec!["\n".to_string(), "# first unit\n".to_string()]
        );
    }

    #[test]
    fn rewinds_to_entry_start() {
        let mut reader = Cursor::new(CATALOG.as_bytes().to_vec());
        locate_entry(&mut reader, "bye").unwrap();

        let mut next = String::new();
        reader.read_line(&mut next).unwrap();
        assert_eq!(next, "msgid \"bye\"\n");
    }

    #[test]
    fn out_of_order_lookup_wraps_once() {
        let mut reader = Cursor::new(CATALOG.as_bytes().to_vec());
        locate_entry(&mut reader, "bye").unwrap();
        // Skip past the located entry so the next search must wrap.
        reader.seek(SeekFrom::End(0)).unwrap();

        let context = locate_entry(&mut reader, "hello").unwrap();
        assert_eq!(
            context,
            vec!["\n".to_string(), "# first unit\n".to_string()]
        );
    }

    #[test]
    fn missing_msgid_fails_after_full_wraparound() {
        let mut reader = Cursor::new(CATALOG.as_bytes().to_vec());
        let err = locate_entry(&mut reader, "nope").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EntryNotFound { msgid } if msgid == "nope"
        ));
    }

    #[test]
    fn missing_msgid_terminates_on_empty_input() {
        let mut reader = Cursor::new(Vec::new());
        assert!(locate_entry(&mut reader, "anything").is_err());
    }
}
