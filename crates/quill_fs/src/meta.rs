use std::path::Path;

impl crate::QuillFS {
    /// Returns true if something exists at `path`. Any failure to stat the
    /// path counts as absent.
    pub fn exists<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().exists()
    }

    pub fn is_file<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_file()
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;

    use crate::QuillFS;

    #[test]
    fn test_exists_follows_open_and_remove() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("testfile.txt");
        assert!(!QuillFS::exists(&path));

        QuillFS::open("testfile.txt", dir.path())?.close()?;
        assert!(QuillFS::exists(&path));
        assert!(QuillFS::is_file(&path));

        QuillFS::remove(&path)?;
        assert!(!QuillFS::exists(&path));
        Ok(())
    }

    #[test]
    fn test_directory_is_not_a_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(QuillFS::exists(dir.path()));
        assert!(!QuillFS::is_file(dir.path()));
        Ok(())
    }
}
