//! Slot implementations: a JSON file on disk and an in-process buffer.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use recipebook_core::Slot;
use tracing::debug;
use uuid::Uuid;

/// A slot stored as `<dir>/<key>.json`.
///
/// A missing file reads as an absent slot. Writes go to a uniquely named
/// temp file in the same directory which is synced and then renamed over
/// the target, so a failed write leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{key}.json"));
        Self { key, path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path
            .with_extension(format!("{}.tmp", Uuid::now_v7().simple()))
    }
}

impl Slot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        let written = fs::File::create(&temp).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }
}

/// A slot held in memory. Useful for tests and for embedding the catalog
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemorySlot {
    key: String,
    contents: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemorySlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            contents: Mutex::new(None),
            writes: AtomicUsize::new(0),
        }
    }

    /// A slot that already holds `contents`, as if written by an earlier
    /// session.
    pub fn with_contents(key: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            contents: Mutex::new(Some(contents.into())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Current raw contents, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }

    /// Number of successful writes since creation.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl Slot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> io::Result<Option<String>> {
        let guard = self
            .contents
            .lock()
            .map_err(|_| io::Error::other("memory slot lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| io::Error::other("memory slot lock poisoned"))?;
        *guard = Some(contents.to_string());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
