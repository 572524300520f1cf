// Utility Module
// File helpers used by the shell

pub mod file_ops;

pub use file_ops::{format_file_size, get_file_size, read_file, read_json, write_file, write_json, FileError, FileResult};
