pub mod search;
pub mod signed_url;
pub mod upload;
