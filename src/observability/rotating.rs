//! Size-rotated append-only file.
//!
//! When the next line would push the active file past `max_bytes`, it is
//! renamed to `<name>.1`, older backups shift up by one (`.1` → `.2`, ...), and
//! anything beyond `max_backups` is deleted. A line longer than `max_bytes` is
//! still written whole to a fresh file.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size threshold (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated files kept.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

#[derive(Debug, Default)]
struct Active {
    file: Option<File>,
    written: u64,
}

/// Thread-safe line writer with size-based rotation.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    active: Mutex<Active>,
}

impl RotatingWriter {
    /// Creates a writer for `path`. Nothing is opened until the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes: max_bytes.max(1),
            max_backups,
            active: Mutex::new(Active::default()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `n`th backup (`1` is the most recent).
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotating, opening, or writing fails,
    /// or if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut active = self
            .active
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if active.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            active.written = file.metadata()?.len();
            active.file = Some(file);
        }

        let incoming = line.len() as u64 + 1;
        if active.written > 0 && active.written + incoming > self.max_bytes {
            active.file = None;
            self.rotate()?;
            active.file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
            active.written = 0;
        }

        let file = active
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;
        writeln!(file, "{line}")?;
        file.flush()?;
        active.written += incoming;
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
