use thiserror::Error;

#[derive(Error, Debug)]
pub enum MuxError {
    #[error("File or directory '{0}' not found")]
    PathNotFound(String),

    #[error("Cannot access {0}: {1}")]
    PathAccess(String, String),

    #[error("No files matched pattern '{0}'")]
    NoMatches(String),

    #[error("No files found matching the provided patterns or directories")]
    NoFilesFound,

    #[error("File {path} is too large ({size} bytes, max {}KB). Use -f to force processing.", .limit / 1024)]
    FileTooLarge { path: String, size: u64, limit: u64 },

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Failed to copy to clipboard: {0}")]
    ClipboardWriteError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl MuxError {
    /// Process exit code reported for this error. Every fatal condition maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<std::io::Error> for MuxError {
    fn from(err: std::io::Error) -> Self {
        MuxError::IoError(err.to_string())
    }
}
