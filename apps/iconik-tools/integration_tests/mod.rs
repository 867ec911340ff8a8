mod helpers;
mod search;
mod signed_url;
mod upload;
