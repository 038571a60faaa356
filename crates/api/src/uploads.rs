//! Local file storage for project images.
//!
//! Uploaded images live under the configured upload root, one directory per
//! project named by sanitizing the project's display name. Stored filenames
//! are UUID-based so concurrent uploads and repeated original names never
//! collide; the original name is kept on the database row.

use std::io;
use std::path::{Path, PathBuf};

use lingkod_core::naming::project_folder_name;
use lingkod_db::models::image::NewImageFile;
use uuid::Uuid;

/// Directory holding a project's images.
pub fn project_dir(root: &Path, project_name: &str) -> PathBuf {
    root.join(project_folder_name(project_name))
}

/// Full path of a stored image file.
pub fn image_path(root: &Path, project_name: &str, file_name: &str) -> PathBuf {
    project_dir(root, project_name).join(file_name)
}

/// Lowercased extension of an uploaded filename, if it has one.
pub fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Write an uploaded image under the project's directory.
///
/// Creates the directory if needed and returns the database-facing file
/// metadata plus the written path (for cleanup if a later step fails).
pub async fn store_image(
    root: &Path,
    project_name: &str,
    original_name: &str,
    data: &[u8],
) -> io::Result<(NewImageFile, PathBuf)> {
    let dir = project_dir(root, project_name);
    tokio::fs::create_dir_all(&dir).await?;

    let file_name = match file_extension(original_name) {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    };
    let path = dir.join(&file_name);
    tokio::fs::write(&path, data).await?;

    let file = NewImageFile {
        file_name,
        original_name: original_name.to_string(),
        file_size_bytes: data.len() as i64,
    };
    Ok((file, path))
}

/// Move a project's image directory when the project is renamed.
///
/// A single rename keeps the migration atomic. Returns `Ok(false)` when
/// there is nothing to move (same directory, or no uploads yet).
pub async fn migrate_project_dir(
    root: &Path,
    old_name: &str,
    new_name: &str,
) -> io::Result<bool> {
    let old_dir = project_dir(root, old_name);
    let new_dir = project_dir(root, new_name);
    if old_dir == new_dir || !tokio::fs::try_exists(&old_dir).await? {
        return Ok(false);
    }
    tokio::fs::rename(&old_dir, &new_dir).await?;
    Ok(true)
}

/// Remove a stored file, logging (not failing) on error.
///
/// Physical deletion happens after the owning transaction commits, so a
/// missing file is not worth surfacing to the client.
pub async fn remove_file(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        if err.kind() != io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %err, "Failed to remove stored file");
        }
    }
}
