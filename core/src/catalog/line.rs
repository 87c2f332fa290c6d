/// Line classification for gettext catalogs
///
/// Every catalog line is exactly one of: an entry-field line
/// (`msgid "Hello"`), a bare continuation string (`"Language: en\n"`,
/// used by multi-line values and the header block), or opaque context
/// (comments, blank lines, anything else).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLine {
    EntryField { field: String, value: String },
    ContinuationString { value: String },
    Other,
}

impl CatalogLine {
    /// Classify one raw line. A trailing newline is ignored; no quote
    /// escaping is performed, the value runs to the last character
    /// before the closing quote at end of line.
    pub fn classify(raw: &str) -> Self {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(parsed) = parse_entry_field(line) {
            return parsed;
        }

        let trimmed = line.trim();
        if let Some(value) = parse_quoted(trimmed) {
            return CatalogLine::ContinuationString {
                value: value.to_string(),
            };
        }

        CatalogLine::Other
    }
}

/// `^(msg\S*)\s+"(.*)"$` — field name anchored at column zero.
fn parse_entry_field(line: &str) -> Option<CatalogLine> {
    if !line.starts_with("msg") {
        return None;
    }

    let split = line.find(char::is_whitespace)?;
    let (field, rest) = line.split_at(split);
    let value = parse_quoted(rest.trim_start())?;
    Some(CatalogLine::EntryField {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_quoted(text: &str) -> Option<&str> {
    text.strip_prefix('"')?.strip_suffix('"')
}
