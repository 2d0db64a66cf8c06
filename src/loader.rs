use serde::de::DeserializeOwned;

use std::{fs, io::ErrorKind, path::Path};

use crate::LoadError;

/// Reads the JSON document at `path` and deserialises it as `T`.
///
/// # Errors
///
/// Returns:
/// * [`LoadError::NotFound`] if there is no file at `path`
/// * [`LoadError::InvalidFormat`] if the file isn't valid JSON, or doesn't
///   have the shape `T` expects
/// * [`LoadError::Io`] for any other failure reading the file
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let document = serde_json::from_str(&text).map_err(|source| LoadError::InvalidFormat {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded JSON document");
    Ok(document)
}
