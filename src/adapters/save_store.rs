//! Save storage adapters.
//!
//! - [`FileSaveStore`]: one file on disk.  Writes go to a sibling
//!   `*.tmp` file which is then renamed over the record, so a crash
//!   mid-write leaves the previous save intact.
//! - [`MemorySaveStore`]: a byte vector, for tests and throwaway runs.
//!   Can be told to fail so error paths are testable.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::app::ports::SavePort;
use crate::error::StorageError;

pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        let tmp = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)
    }
}

fn storage_error(e: &io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::StorageFull => StorageError::Full,
        _ => StorageError::IoError,
    }
}

impl SavePort for FileSaveStore {
    fn load(&mut self) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), self.path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                warn!("Reading {} failed: {}", self.path.display(), e);
                Err(storage_error(&e))
            }
        }
    }

    fn store(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.write_atomic(bytes).map_err(|e| {
            warn!("Writing {} failed: {}", self.path.display(), e);
            storage_error(&e)
        })
    }
}

/// In-memory save slot.
#[derive(Debug, Default)]
pub struct MemorySaveStore {
    record: Option<Vec<u8>>,
    fail_with: Option<StorageError>,
    writes: usize,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `bytes` already stored.
    pub fn with_record(bytes: Vec<u8>) -> Self {
        Self {
            record: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent `store` fail with `error` (`None` heals it).
    pub fn set_failure(&mut self, error: Option<StorageError>) {
        self.fail_with = error;
    }

    pub fn record(&self) -> Option<&[u8]> {
        self.record.as_deref()
    }

    /// Successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SavePort for MemorySaveStore {
    fn load(&mut self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.record.clone())
    }

    fn store(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.record = Some(bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}
