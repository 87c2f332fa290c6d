/// A1-notation range addressing
///
/// Column letters use the bijective base-26 scheme: there is no zero
/// letter, so 1→A, 26→Z, 27→AA, 52→AZ, 53→BA.

/// Convert a 1-based column index to its letter form.
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    while n > 0 {
        let offset = (n - 1) % 26;
        letters.push(b'A' + offset as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).expect("ASCII letters")
}

/// Convert a letter-form column back to its 1-based index.
pub fn column_index(letters: &str) -> usize {
    letters
        .bytes()
        .fold(0, |acc, b| acc * 26 + (b - b'A' + 1) as usize)
}

/// Build a `Sheet!A1:B2` range string.
pub fn range_name(
    sheet: &str,
    row_start: usize,
    row_end: usize,
    column_start: &str,
    column_end: &str,
) -> String {
    format!("{sheet}!{column_start}{row_start}:{column_end}{row_end}")
}
