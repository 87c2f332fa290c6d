/// Catalog file discovery
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recursively collect every `.po` file under `root` (extension
/// matched case-insensitively), sorted lexicographically by path so
/// push's cumulative row offsets are deterministic across runs.
pub fn find_catalog_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    scan_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_recursive(current: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            scan_recursive(&path, files)?;
        } else if path.is_file() && is_catalog(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_catalog(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("po"))
        .unwrap_or(false)
}
