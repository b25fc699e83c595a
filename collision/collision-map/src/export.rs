//! Nested-array JSON import/export.
//!
//! The wire format is pure nested numeric arrays, one `[x, y]` pair per
//! vertex: `[[[x, y], ...], ...]`. No object wrappers, no metadata.

use std::fs;
use std::path::Path;

use collision_types::CollisionSet;
use tracing::info;

use crate::error::{MapError, MapResult};

/// Serialize a shape set to compact nested-array JSON.
///
/// # Errors
///
/// Returns [`MapError::Json`] on serialization failure.
pub fn export_json(set: &CollisionSet) -> MapResult<String> {
    Ok(serde_json::to_string(set)?)
}

/// Parse nested-array JSON back into a shape set.
///
/// Vertex counts are re-validated on the way in: any shape outside 3-8
/// vertices rejects the whole document.
///
/// # Errors
///
/// Returns [`MapError::Json`] for malformed JSON or out-of-range shapes.
pub fn parse_json(json: &str) -> MapResult<CollisionSet> {
    Ok(serde_json::from_str(json)?)
}

/// Write a shape set to a JSON file, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`MapError::Json`] on serialization failure and
/// [`MapError::IoWrite`] when the file cannot be written.
pub fn save_collision_json(set: &CollisionSet, path: &Path) -> MapResult<()> {
    let json = export_json(set)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| MapError::IoWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, &json).map_err(|source| MapError::IoWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), shapes = set.len(), "Wrote collision JSON");
    Ok(())
}
