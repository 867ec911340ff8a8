mod b2;
mod local_file;
