use common::ErrorLocation;
use iconik_client::error::{ConfigError, IconikClientError, UploadError};

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the command-line tools.
///
/// Library errors are flattened into messages so a failure can also be
/// reported as JSON, keeping the location of the `?` that raised it.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ToolError {
    /// Error from the tool itself (arguments, output, logging)
    #[error("Tool Error: {message} {location}")]
    Tool {
        message: String,
        location: ErrorLocation,
    },

    /// Config file or credentials could not be loaded
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// An Iconik API call failed
    #[error("Iconik Error ({category}): {message} {location}")]
    Iconik {
        category: String,
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
    },

    /// The upload workflow failed
    #[error("Upload Error: {message} {location}")]
    Upload {
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
    },
}

impl ToolError {
    #[track_caller]
    pub fn tool(message: impl Into<String>) -> Self {
        ToolError::Tool {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for ToolError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        ToolError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IconikClientError> for ToolError {
    #[track_caller]
    fn from(error: IconikClientError) -> Self {
        ToolError::Iconik {
            category: error.error_category().to_string(),
            status: error.status_code(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<UploadError> for ToolError {
    #[track_caller]
    fn from(error: UploadError) -> Self {
        ToolError::Upload {
            status: error.status_code(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ToolError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ToolError::Tool {
            message: format!("HTTP request failed: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for ToolError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        ToolError::Tool {
            message: format!("Failed to write output: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ToolError::Tool {
            message: format!("Failed to encode JSON: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
