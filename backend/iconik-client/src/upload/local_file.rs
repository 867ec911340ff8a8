use crate::error::upload::UploadError;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use humantime::format_rfc3339_seconds;

/// Facts about a local file needed to register it on Iconik.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
    pub created: SystemTime,
    pub modified: SystemTime,
}

impl LocalFile {
    /// Stat `path` and guess its mime type from the extension.
    pub async fn inspect(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| UploadError::io(path, e))?;

        if !metadata.is_file() {
            return Err(UploadError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| UploadError::missing_field(format!("{} has no file name", path.display())))?;

        let modified = metadata.modified().map_err(|e| UploadError::io(path, e))?;
        // Not every filesystem records a birth time.
        let created = metadata.created().unwrap_or(modified);

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size: metadata.len(),
            mime_type: guess_mime_type(path),
            created,
            modified,
        })
    }

    pub fn created_rfc3339(&self) -> String {
        format_rfc3339_seconds(self.created).to_string()
    }

    pub fn modified_rfc3339(&self) -> String {
        format_rfc3339_seconds(self.modified).to_string()
    }
}

pub fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
