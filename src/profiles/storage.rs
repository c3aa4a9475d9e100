//! Filesystem helpers for reading/writing vault JSON artifacts.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Loads a JSON artifact if it exists.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Option<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read(path).with_context(|| format!("Failed reading vault artifact {:?}", path))?;
    let value = serde_json::from_slice(&data)
        .with_context(|| format!("Failed parsing vault artifact {:?}", path))?;
    Ok(Some(value))
}

/// Like `read_json`, but an unreadable or corrupt artifact reads as absent.
pub fn read_json_lenient<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Option<T> {
    let path = path.as_ref();
    match read_json(path) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable artifact");
            None
        }
    }
}

/// Writes a pretty-printed JSON artifact.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating vault directory {:?}", parent))?;
    }
    let payload = serde_json::to_vec_pretty(value)
        .with_context(|| format!("Failed serializing vault artifact {:?}", path))?;
    let mut file =
        fs::File::create(path).with_context(|| format!("Failed opening vault artifact {:?}", path))?;
    file.write_all(&payload)
        .with_context(|| format!("Failed writing vault artifact {:?}", path))
}

/// Removes an artifact; missing files are not an error.
pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed removing vault artifact {:?}", path))?;
    }
    Ok(())
}

/// Computes a lowercase hex SHA-256 hash of the provided bytes.
pub fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
