use crate::mux::MuxConfig;
use crate::MuxError;
use std::fs;
use tracing::{trace, warn};

/// Number of leading bytes inspected by [`is_binary`].
pub const BINARY_SNIFF_LEN: usize = 1024;

#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: String,
    pub size: u64,
    pub content: Vec<u8>,
    pub binary: bool,
}

/// Loads one file from the expanded list.
///
/// Returns `Ok(None)` when the file cannot be stat'ed or read; the caller
/// moves on to the next file. An oversized file without `force` is fatal.
pub fn load_file(path: &str, config: &MuxConfig) -> Result<Option<FileRecord>, MuxError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Error checking {}: {}", path, e);
            return Ok(None);
        }
    };

    let size = metadata.len();
    if size > config.max_file_size && !config.force {
        return Err(MuxError::FileTooLarge {
            path: path.to_string(),
            size,
            limit: config.max_file_size,
        });
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Error reading {}: {}", path, e);
            return Ok(None);
        }
    };
    trace!("Read {} bytes from {}", bytes.len(), path);

    Ok(Some(FileRecord {
        path: path.to_string(),
        size,
        binary: is_binary(&bytes),
        content: bytes,
    }))
}

/// Heuristic binary sniff over the first [`BINARY_SNIFF_LEN`] bytes: any
/// control byte other than whitespace (tab, newline, vertical tab, form feed,
/// carriage return) marks the content as binary.
pub fn is_binary(content: &[u8]) -> bool {
    let sniff = &content[..content.len().min(BINARY_SNIFF_LEN)];
    sniff
        .iter()
        .any(|&b| b < 32 && !char::from(b).is_whitespace())
}
