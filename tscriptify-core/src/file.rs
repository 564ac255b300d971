use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// File name prefix of persisted driver programs.
pub const DRIVER_PREFIX: &str = "typescriptify_";

/// File name suffix of persisted driver programs.
pub const DRIVER_SUFFIX: &str = ".go";

/// A synthesized driver program persisted to a uniquely named temporary file.
///
/// The file handle is owned for the whole lifetime of the value and released
/// (and the file removed) when it is dropped, on every exit path.
#[derive(Debug)]
pub struct DriverFile {
    file: NamedTempFile,
}

impl DriverFile {
    /// Persist `content` into a fresh file in the system temporary directory.
    pub fn persist(content: &str) -> Result<Self> {
        Self::persist_in(&std::env::temp_dir(), content)
    }

    /// Persist `content` into a fresh file inside `dir`.
    pub fn persist_in(dir: &Path, content: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(DRIVER_PREFIX)
            .suffix(DRIVER_SUFFIX)
            .tempfile_in(dir)
            .map_err(|e| Error::io("create temporary file in", dir, e))?;

        let path = file.path().to_path_buf();
        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| Error::io("write", path, e))?;

        tracing::debug!(path = %file.path().display(), bytes = content.len(), "persisted driver program");
        Ok(Self { file })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Owned copy of the file path.
    pub fn to_path_buf(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Read the persisted program back from disk.
    pub fn read_back(&self) -> Result<String> {
        std::fs::read_to_string(self.path()).map_err(|e| Error::io("read", self.path(), e))
    }
}
