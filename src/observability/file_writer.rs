//! Size-rotated append-only file for trace export.
//!
//! Each write is one line. Before a write, a file that has grown past the
//! size limit is moved aside to `<name>.<timestamp>` and a fresh file is
//! started. Only the newest few backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size that triggers rotation (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Backup suffix format. Lexical order matches chronological order.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.9f";

/// Thread-safe rotating line writer.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened on first write, dropped on rotation.
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits. Nothing is opened yet.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Fails when the lock is poisoned or when rotating, opening, writing, or
    /// flushing the file fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::other("trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        fs::rename(&self.file_path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` backups. Individual delete
    /// failures are ignored.
    fn prune_backups(&self) -> io::Result<()> {
        let dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let prefix = format!("{}.", file_name(&self.file_path));

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| file_name(path).starts_with(&prefix))
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));
        for stale in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }

        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn backups_in(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("traces.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        assert_eq!(backups_in(dir.path()), 1);
    }

    #[test]
    fn keeps_only_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::with_limits(path, 1, 2);

        for i in 0..5 {
            writer.write_line(&format!("line {i}")).unwrap();
        }

        assert_eq!(backups_in(dir.path()), 2);
    }
}
