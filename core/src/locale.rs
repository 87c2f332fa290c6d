/// Locale derivation from catalog paths
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use thiserror::Error;

/// Shape of the directory segment preceding LC_MESSAGES ("pt-BR", "en", ...).
static LOCALE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z-]+$").expect("valid regex"));

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error(
        "could not determine locale for file {0}, \
         make sure it's inside an LC_MESSAGES folder"
    )]
    Unresolvable(String),
}

/// Determine the locale of a catalog from its path.
///
/// All catalogs are expected to live under `*/<locale>/LC_MESSAGES/*.po`;
/// the locale is the segment immediately preceding the `LC_MESSAGES`
/// directory.
pub fn locale_from_path(path: &Path) -> Result<String, LocaleError> {
    let components: Vec<&str> = path
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    for window in components.windows(2) {
        if window[1] == "LC_MESSAGES" && LOCALE_SEGMENT.is_match(window[0]) {
            return Ok(window[0].to_string());
        }
    }

    Err(LocaleError::Unresolvable(path.display().to_string()))
}
