use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

impl crate::QuillFS {
    /// Reads the whole file at `path` as UTF-8 text.
    pub fn read<T: AsRef<Path>>(path: T) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;

        debug!(path = %path.display(), bytes = content.len(), "Read file");
        Ok(content)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    use crate::{Error, QuillFS};

    #[test]
    fn test_read() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        std::fs::write(file.path(), "Hello 世界!")?;

        let actual = QuillFS::read(file.path())?;
        assert_eq!(actual, "Hello 世界!");
        Ok(())
    }

    #[test]
    fn test_read_missing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing.txt");

        let err = QuillFS::read(&path).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
        Ok(())
    }
}
