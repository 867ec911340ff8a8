pub mod config;
pub mod iconik_client;
pub mod upload;

pub use config::ConfigError;
pub use iconik_client::IconikClientError;
pub use upload::UploadError;
