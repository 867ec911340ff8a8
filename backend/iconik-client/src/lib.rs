pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod upload;

pub use client::IconikClient;
pub use config::ClientConfig;
pub use credentials::Credentials;

#[cfg(test)]
mod tests;

pub const ICONIK_HOST: &str = "https://app.iconik.io";
pub const ICONIK_API_BASE_URL: &str = const_format::concatcp!(ICONIK_HOST, "/API/");
