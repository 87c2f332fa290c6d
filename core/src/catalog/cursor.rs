/// Read/write cursor pairs with atomic promotion
use super::locator::locate_entry;
use super::rewriter::{copy_context, rewrite_entry, RowUpdate};
use super::CatalogError;
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// An open catalog being rewritten: a read cursor over the original
/// file and a write cursor over a sibling `.tmp` file. The original is
/// only touched by [`CursorPair::promote`]; dropping the pair without
/// promoting leaves it untouched.
#[derive(Debug)]
pub struct CursorPair {
    reader: BufReader<File>,
    writer: BufWriter<File>,
    original: PathBuf,
    temp: PathBuf,
}

impl CursorPair {
    /// Open `path` for reading and its `.tmp` sibling for writing
    /// (truncated, so a retried run starts clean), then pre-seed the
    /// output with the header block copied verbatim.
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let temp = sibling_path(path, ".tmp");
        debug!("Opening read and write file handles for {}...", path.display());

        let mut pair = Self {
            reader: BufReader::new(File::open(path)?),
            writer: BufWriter::new(
                OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&temp)?,
            ),
            original: path.to_path_buf(),
            temp,
        };

        let context = pair.locate("")?;
        copy_context(&mut pair.writer, &context)?;
        rewrite_entry(&mut pair.reader, &mut pair.writer, None)?;
        Ok(pair)
    }

    /// Advance the read cursor to the entry for `msgid`, returning its
    /// preceding context lines.
    pub fn locate(&mut self, msgid: &str) -> Result<Vec<String>, CatalogError> {
        locate_entry(&mut self.reader, msgid)
    }

    /// Emit one located entry: its context verbatim, then the entry
    /// itself with values taken from `update`.
    pub fn rewrite(
        &mut self,
        context: &[String],
        update: RowUpdate<'_>,
    ) -> Result<(), CatalogError> {
        copy_context(&mut self.writer, context)?;
        rewrite_entry(&mut self.reader, &mut self.writer, Some(update))
    }

    /// Replace the original with the rewritten file, rotating the
    /// previous version to a `.old` sibling (removed first if one is
    /// already there).
    pub fn promote(self) -> Result<(), CatalogError> {
        let Self {
            reader,
            mut writer,
            original,
            temp,
        } = self;

        writer.flush()?;
        drop(writer);
        drop(reader);

        let old = sibling_path(&original, ".old");
        match fs::remove_file(&old) {
            Ok(()) => debug!("Removed {}.", old.display()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("Old file does not exist, nothing to do.");
            }
            Err(err) => return Err(err.into()),
        }
        fs::rename(&original, &old)?;
        fs::rename(&temp, &original)?;
        Ok(())
    }

    /// Abandon the rewrite: close both handles and remove the temp
    /// file, leaving the original untouched.
    pub fn discard(self) {
        let Self {
            reader,
            writer,
            temp,
            ..
        } = self;
        drop(writer);
        drop(reader);
        if let Err(err) = fs::remove_file(&temp) {
            debug!("Could not remove {}: {}", temp.display(), err);
        }
    }

    pub fn original(&self) -> &Path {
        &self.original
    }
}

fn sibling_path(target: &Path, suffix: &str) -> PathBuf {
    let mut path = target.as_os_str().to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}
