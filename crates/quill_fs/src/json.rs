use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::{indent, ComposeConfig, Error, Result};

const JSON_EXTENSION: &str = ".json";

/// Appends the `.json` suffix to a file name.
pub fn add_json_extension(name: &str) -> String {
    format!("{name}{JSON_EXTENSION}")
}

fn json_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(add_json_extension(name))
}

impl crate::QuillFS {
    /// Serializes `data` as indented JSON into `dir/name.json`, overwriting
    /// any existing file.
    pub fn create_json<T: Serialize + ?Sized, P: AsRef<Path>>(
        data: &T,
        dir: P,
        name: &str,
    ) -> Result<()> {
        Self::create_json_with(data, dir, name, &ComposeConfig::default())
    }

    pub fn create_json_with<T: Serialize + ?Sized, P: AsRef<Path>>(
        data: &T,
        dir: P,
        name: &str,
        config: &ComposeConfig,
    ) -> Result<()> {
        let indent = indent(config.json_indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        data.serialize(&mut serializer).map_err(Error::Serialize)?;

        Self::write_text(dir, &add_json_extension(name), buf)
    }

    /// Reads `dir/name.json` and deserializes it into `T`.
    pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(dir: P, name: &str) -> Result<T> {
        let path = json_path(dir.as_ref(), name);
        let bytes =
            std::fs::read(&path).map_err(|source| Error::Read { path: path.clone(), source })?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|source| Error::Deserialize { path: path.clone(), source })?;

        debug!(path = %path.display(), "Read JSON file");
        Ok(value)
    }

    /// Returns true if `dir/name.json` exists.
    pub fn json_exists<P: AsRef<Path>>(dir: P, name: &str) -> bool {
        Self::exists(json_path(dir.as_ref(), name))
    }

    /// Deletes `dir/name.json`. Returns `Ok(false)` when there was nothing
    /// to delete.
    pub fn remove_json<P: AsRef<Path>>(dir: P, name: &str) -> Result<bool> {
        let path = json_path(dir.as_ref(), name);
        if !Self::exists(&path) {
            return Ok(false);
        }

        Self::remove(&path)?;
        Ok(true)
    }
}
