//! Crash-safe archive writes through a sibling temporary file.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use super::error::ArchiveError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary file removed on drop unless it was renamed into place.
struct PendingFile<'dir> {
    dir: &'dir Dir,
    name: String,
    committed: bool,
}

impl Drop for PendingFile<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(error) = self.dir.remove_file(&self.name) {
            debug!(file = %self.name, error = %error, "temporary archive file not removed");
        }
    }
}

impl PendingFile<'_> {
    fn write(&self, contents: &str) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = self.dir.open_with(&self.name, &options)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }

    fn commit(mut self, target: &str) -> io::Result<()> {
        replace(self.dir, &self.name, target)?;
        self.committed = true;
        Ok(())
    }
}

/// Writes `contents` to `path` inside `dir` so readers never see a partial
/// archive.
///
/// `path` must name a single file directly inside `dir`.
pub(crate) fn write_atomic(
    dir: &Dir,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), ArchiveError> {
    let write_error = |err: io::Error| ArchiveError::WriteError {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(ArchiveError::WriteError {
            path: path.to_path_buf(),
            message: "archive path must name a file in the archive directory".to_owned(),
        });
    };

    let pending = PendingFile {
        dir,
        name: temp_name(file_name),
        committed: false,
    };
    pending.write(contents).map_err(write_error)?;
    pending.commit(file_name).map_err(write_error)?;

    if let Err(error) = dir.open(".").and_then(|handle| handle.sync_all()) {
        debug!(path = %path, error = %error, "archive directory sync failed");
    }
    Ok(())
}

fn temp_name(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id())
}

#[cfg(windows)]
fn replace(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    match dir.remove_file(to) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    dir.rename(from, dir, to)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    dir.rename(from, dir, to)
}
