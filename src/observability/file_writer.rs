//! Rotating log file with size-based rotation and backup retention.
//!
//! Plugs into `tracing-subscriber`'s fmt layer as a [`MakeWriter`], so log lines from
//! every thread funnel through one locked file handle. Rotation keeps disk usage
//! bounded for long-running processes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file.
///
/// When the current file exceeds the size threshold it is renamed to
/// `<name>.<unix_millis>` (`<name>.<unix_millis>-<n>` if that backup already exists) and
/// a fresh file is started. Backups beyond the retention
/// limit are removed, newest kept.
pub struct RotatingFile {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily-opened handle (opens on first write).
    handle: Mutex<Option<fs::File>>,
}

impl RotatingFile {
    /// Creates a rotating file with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a rotating file with explicit limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf`, rotating first if the file has grown past the limit.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors or if another thread panicked while holding the lock.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut handle)?;

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    fn check_and_rotate(&self, handle: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *handle = None;
                self.rotate()?;
            }
        }
        Ok(())
    }

    fn file_name(&self) -> io::Result<&str> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
    }

    fn rotate(&self) -> io::Result<()> {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        if self.file_path.exists() {
            let backup_path = self.backup_path(millis)?;
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// First unused backup path for a rotation at `millis`.
    fn backup_path(&self, millis: u128) -> io::Result<PathBuf> {
        let base = format!("{}.{millis}", self.file_name()?);
        let mut candidate = self.file_path.with_file_name(&base);
        let mut n = 1;
        while candidate.exists() {
            candidate = self.file_path.with_file_name(format!("{base}-{n}"));
            n += 1;
        }
        Ok(candidate)
    }

    /// Removes backups beyond the retention limit, newest first by mtime.
    ///
    /// Individual removal errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let prefix = format!("{}.", self.file_name()?);

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time).then_with(|| b.cmp(a))
        });

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// Per-event writer handed out by [`RotatingFile`].
#[derive(Debug)]
pub struct RotatingWriter<'a> {
    file: &'a RotatingFile,
}

impl Write for RotatingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = RotatingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriter { file: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &Path, name: &str) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|n| n.starts_with(&format!("{name}.")))
            })
            .count()
    }

    #[test]
    fn writes_through_make_writer() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingFile::new(dir.path().join("facetfolio.log"));

        log.make_writer().write_all(b"first line\n").unwrap();
        log.make_writer().write_all(b"second line\n").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn rotates_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingFile::with_limits(dir.path().join("facetfolio.log"), 10, 1);
        let line = b"0123456789abcdefghij\n";

        for _ in 0..4 {
            log.write_bytes(line).unwrap();
        }

        assert_eq!(fs::read(log.path()).unwrap(), line.to_vec());
        assert_eq!(backups_in(dir.path(), "facetfolio.log"), 1);
    }

    #[test]
    fn rapid_rotations_keep_every_backup() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingFile::with_limits(dir.path().join("facetfolio.log"), 0, 10);

        for n in 0..5 {
            log.write_bytes(format!("line {n}\n").as_bytes()).unwrap();
        }

        assert_eq!(backups_in(dir.path(), "facetfolio.log"), 4);
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "line 4\n");
    }

    #[test]
    fn backup_path_skips_taken_names() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingFile::new(dir.path().join("facetfolio.log"));

        fs::write(dir.path().join("facetfolio.log.42"), "old").unwrap();
        fs::write(dir.path().join("facetfolio.log.42-1"), "old").unwrap();

        assert_eq!(
            log.backup_path(42).unwrap(),
            dir.path().join("facetfolio.log.42-2")
        );
    }
}
