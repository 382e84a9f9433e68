use std::fs;
use std::io;
use std::path::Path;

/// Result of a change-detecting write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Existing file already held exactly these bytes; nothing was written.
    Unchanged,
    /// File was created or overwritten.
    Updated,
}

/// Writes `content` to `path` only if it differs byte-for-byte from what is
/// already there. A missing file counts as "no prior content" and always
/// triggers a write.
///
/// This is the only side effect in the pipeline; skipping the no-op write
/// keeps the file's modification state (and any downstream commit hook)
/// untouched when the feed has not changed.
pub fn write_if_changed(path: impl AsRef<Path>, content: &[u8]) -> io::Result<WriteOutcome> {
    let path = path.as_ref();

    if let Some(existing) = read_existing(path)? {
        if existing == content {
            return Ok(WriteOutcome::Unchanged);
        }
    }

    fs::write(path, content)?;
    Ok(WriteOutcome::Updated)
}

fn read_existing(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
