mod client;
mod credentials;
mod error;
mod upload;
