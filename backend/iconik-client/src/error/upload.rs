use crate::config::{B2_MAX_PART_SIZE, B2_MIN_PART_SIZE};
use crate::error::IconikClientError;

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors raised by the new-asset workflow and the B2 transfer.
#[derive(Debug, ThisError)]
pub enum UploadError {
    #[error("File Error: {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Transfer Error: HTTP {status} - {message} {location}")]
    Transfer {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Transfer HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transfer Response Error: {message} {location}")]
    Response {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Part Size Error: {part_size} bytes (must be {min}-{max}) {location}")]
    InvalidPartSize {
        part_size: u64,
        min: u64,
        max: u64,
        location: ErrorLocation,
    },

    #[error("Missing Field Error: {message} {location}")]
    MissingField {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Client(#[from] IconikClientError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl UploadError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UploadError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transfer(status: u16, message: impl Into<String>) -> Self {
        UploadError::Transfer {
            status: HttpStatusCode(status),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_part_size(part_size: u64) -> Self {
        UploadError::InvalidPartSize {
            part_size,
            min: B2_MIN_PART_SIZE,
            max: B2_MAX_PART_SIZE,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(message: impl Into<String>) -> Self {
        UploadError::MissingField {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of a failed Iconik call or B2 transfer.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UploadError::Transfer { status, .. } => Some(status.0),
            UploadError::Client(e) => e.status_code(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UploadError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        UploadError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for UploadError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        UploadError::Response {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
