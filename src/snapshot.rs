// 💾 Snapshot Persistence - a store's full contents as one JSON document
//
// Format: a pretty-printed JSON array of entity objects, one object per
// entity, field names taken from the entity struct.
//
// Loading is all-or-nothing: either every entity in the file is decoded or
// the call fails and nothing is returned.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Write a full snapshot, replacing any previous one.
///
/// Parent directories are created when missing. The document is written to a
/// sibling temp file and renamed into place, so a failed write never leaves a
/// truncated snapshot behind.
pub fn save<T: Serialize>(entities: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(entities).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, json) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::io(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::io(path, e));
    }

    debug!(path = %path.display(), count = entities.len(), "saved snapshot");
    Ok(())
}

/// Read a snapshot.
///
/// A missing file, an empty file, or a `null` document all mean "nothing
/// saved yet" and yield an empty vector.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "no snapshot to load");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entities: Option<Vec<T>> = serde_json::from_str(&content).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let entities = entities.unwrap_or_default();

    debug!(path = %path.display(), count = entities.len(), "loaded snapshot");
    Ok(entities)
}

/// Like [`load`], but any failure is logged and degrades to an empty vector
pub fn load_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match load(path) {
        Ok(entities) => entities,
        Err(e) => {
            warn!(error = %e, "snapshot unreadable, starting empty");
            Vec::new()
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}

// ============================================================================
// TESTS
// ============================================================================
