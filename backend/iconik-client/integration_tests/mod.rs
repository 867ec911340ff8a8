mod errors;
mod helpers;
mod search;
mod upload;
mod urls;
