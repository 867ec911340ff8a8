//! Errors raised while talking to the Iconik API.
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - Non-2xx bodies decoded into Iconik's `{"errors": [...]}` shape, or the
//!   unparsable sentinel
//! - All errors include ErrorLocation for debugging

use common::{ErrorLocation, HttpStatusCode};
use models::ApiErrorBody;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum IconikClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("API Error: HTTP {status} - {} {location}", .errors.join("; "))]
    Api {
        status: HttpStatusCode,
        errors: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Not Found Error: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl IconikClientError {
    /// Build an API error from a failed response, decoding Iconik's error body.
    #[track_caller]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = ApiErrorBody::parse_or_sentinel(body);
        IconikClientError::Api {
            status: HttpStatusCode(status),
            errors: parsed.errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        IconikClientError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        IconikClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status code for API errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IconikClientError::Api { status, .. } => Some(status.0),
            _ => None,
        }
    }

    /// Messages reported by Iconik, if this is an API error.
    pub fn api_errors(&self) -> Option<&[String]> {
        match self {
            IconikClientError::Api { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Error category for log lines.
    pub fn error_category(&self) -> &'static str {
        match self {
            IconikClientError::Http { is_timeout: true, .. } => "timeout",
            IconikClientError::Http { is_connection: true, .. } => "connection",
            IconikClientError::Http { .. } => "http",
            IconikClientError::Json { .. } => "json",
            IconikClientError::UrlParse { .. } => "url",
            IconikClientError::Api { status, .. } if status.is_auth_failure() => "auth",
            IconikClientError::Api { status, .. } if status.is_client_error() => "client_error",
            IconikClientError::Api { status, .. } if status.is_server_error() => "server_error",
            IconikClientError::Api { .. } => "api",
            IconikClientError::NotFound { .. } => "not_found",
            IconikClientError::Validation { .. } => "validation",
        }
    }
}

impl From<url::ParseError> for IconikClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        IconikClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for IconikClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        IconikClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for IconikClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        IconikClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
