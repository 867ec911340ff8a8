//! Shared building blocks for the Iconik workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, HTTP status helpers, secret handling
//! - **models**: Iconik request/response data structures
//! - **iconik-client**: API client and the asset upload workflow
//! - **iconik-tools**: command-line programs wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
