mod api_error;
mod file;
mod job;
mod listing;
mod search;
mod upload;
