use serde::{Deserialize, Serialize};

/// Message used when a failed response body cannot be decoded.
pub const UNPARSABLE_ERROR_MESSAGE: &str = "UNKNOWN; error message not parsable";

/// Error payload returned by Iconik alongside non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiErrorBody {
    /// Decode an error body, falling back to the unparsable sentinel.
    pub fn parse_or_sentinel(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|_| Self::sentinel())
    }

    pub fn sentinel() -> Self {
        Self {
            errors: vec![UNPARSABLE_ERROR_MESSAGE.to_string()],
        }
    }
}
