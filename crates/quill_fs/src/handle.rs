use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Anything the directive composer can append rendered text to.
pub trait TextSink {
    fn append(&mut self, text: &str) -> Result<()>;
}

/// An open, writable file owned by the caller.
///
/// The underlying descriptor is released when the handle is dropped, so an
/// early return never leaks it. Use [`FileHandle::close`] to observe errors
/// from the final sync.
#[derive(Debug)]
pub struct FileHandle {
    file: File,
    path: PathBuf,
}

impl FileHandle {
    pub(crate) fn new(file: File, path: PathBuf) -> Self {
        Self { file, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the file currently has a size of zero.
    pub fn is_empty(&self) -> Result<bool> {
        let metadata = self
            .file
            .metadata()
            .map_err(|source| Error::Metadata { path: self.path.clone(), source })?;
        Ok(metadata.len() == 0)
    }

    /// Appends `text` to the end of the file.
    ///
    /// No separator is inserted, whether or not the file is empty.
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.file
            .seek(SeekFrom::End(0))
            .and_then(|_| self.file.write_all(text.as_bytes()))
            .map_err(|source| Error::Write { path: self.path.clone(), source })?;

        debug!(path = %self.path.display(), bytes = text.len(), "Appended to file");
        Ok(())
    }

    /// Flushes pending data to disk and releases the handle.
    pub fn close(mut self) -> Result<()> {
        self.file
            .flush()
            .and_then(|_| self.file.sync_all())
            .map_err(|source| Error::Close { path: self.path.clone(), source })?;

        debug!(path = %self.path.display(), "Closed file");
        Ok(())
    }
}

impl TextSink for FileHandle {
    fn append(&mut self, text: &str) -> Result<()> {
        FileHandle::append(self, text)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    use crate::QuillFS;

    #[test]
    fn test_append_and_read_back() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut file = QuillFS::open("testfile.txt", dir.path())?;

        file.append("Hello, World!")?;
        file.close()?;

        let actual = QuillFS::read(dir.path().join("testfile.txt"))?;
        assert_eq!(actual, "Hello, World!");
        Ok(())
    }

    #[test]
    fn test_append_does_not_insert_separator() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut file = QuillFS::open("testfile.txt", dir.path())?;

        file.append("Hello")?;
        file.append(", ")?;
        file.append("World")?;
        file.close()?;

        let actual = QuillFS::read(dir.path().join("testfile.txt"))?;
        assert_eq!(actual, "Hello, World");
        Ok(())
    }

    #[test]
    fn test_is_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut file = QuillFS::open("testfile.txt", dir.path())?;

        assert!(file.is_empty()?, "Freshly opened file should be empty");

        file.append("Hello")?;
        assert!(!file.is_empty()?, "File should not be empty after a write");
        Ok(())
    }

    #[test]
    fn test_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = QuillFS::open("testfile.txt", dir.path())?;
        assert_eq!(file.path(), dir.path().join("testfile.txt"));
        Ok(())
    }

    #[test]
    fn test_close() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = QuillFS::open("testfile.txt", dir.path())?;
        file.close()?;
        Ok(())
    }
}
