// File Operations for RSA Encryption/Decryption
// Handles reading and writing raw files and JSON documents for the shell

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during file operations
#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FileError {
    fn io(path: &Path, source: io::Error) -> Self {
        FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        FileError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Read entire file into memory
pub fn read_file(path: &Path) -> FileResult<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| FileError::io(path, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(|e| FileError::io(path, e))?;
    Ok(data)
}

/// Write data to file, replacing any previous content
pub fn write_file(path: &Path, data: &[u8]) -> FileResult<()> {
    let mut file = File::create(path).map_err(|e| FileError::io(path, e))?;
    file.write_all(data).map_err(|e| FileError::io(path, e))
}

/// Get file size in bytes
pub fn get_file_size(path: &Path) -> FileResult<u64> {
    let metadata = fs::metadata(path).map_err(|e| FileError::io(path, e))?;
    Ok(metadata.len())
}

/// Read a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> FileResult<T> {
    let data = read_file(path)?;
    serde_json::from_slice(&data).map_err(|e| FileError::json(path, e))
}

/// Write a value as pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> FileResult<()> {
    let data = serde_json::to_vec_pretty(value).map_err(|e| FileError::json(path, e))?;
    write_file(path, &data)
}

/// Format file size for display
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_read_write_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let data = [0u8, 1, 2, 255];

        write_file(&path, &data).unwrap();
        assert_eq!(read_file(&path).unwrap(), data);
        assert_eq!(get_file_size(&path).unwrap(), 4);
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.bin");
        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
        assert!(err.to_string().contains("missing.bin"));
    }

    #[test]
    fn test_json_roundtrip_and_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");
        let value: BTreeMap<String, u32> = [("a".to_string(), 1), ("b".to_string(), 2)].into();

        write_json(&path, &value).unwrap();
        let restored: BTreeMap<String, u32> = read_json(&path).unwrap();
        assert_eq!(restored, value);

        write_file(&path, b"{not json").unwrap();
        let err = read_json::<BTreeMap<String, u32>>(&path).unwrap_err();
        assert!(matches!(err, FileError::Json { .. }));
    }
}
