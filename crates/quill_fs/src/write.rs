use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;

use crate::{Error, FileHandle, Result};

impl crate::QuillFS {
    /// Creates `dir/name`, truncating any existing file, and returns a handle
    /// ready for appends.
    pub fn open<T: AsRef<Path>>(name: &str, dir: T) -> Result<FileHandle> {
        let path = dir.as_ref().join(name);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| Error::Open { path: path.clone(), source })?;

        debug!(path = %path.display(), "Opened file for writing");
        Ok(FileHandle::new(file, path))
    }

    /// Writes `contents` to `dir/name` in one go, replacing any existing file.
    pub fn write_text<T: AsRef<Path>, U: AsRef<[u8]>>(
        dir: T,
        name: &str,
        contents: U,
    ) -> Result<()> {
        let path = dir.as_ref().join(name);
        std::fs::write(&path, contents.as_ref())
            .map_err(|source| Error::Write { path: path.clone(), source })?;

        debug!(path = %path.display(), bytes = contents.as_ref().len(), "Wrote file");
        Ok(())
    }

    pub fn remove<T: AsRef<Path>>(path: T) -> Result<()> {
        let path = path.as_ref();
        std::fs::remove_file(path)
            .map_err(|source| Error::Remove { path: path.to_path_buf(), source })?;

        debug!(path = %path.display(), "Removed file");
        Ok(())
    }
}
