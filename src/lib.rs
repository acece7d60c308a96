pub mod cli;
pub mod clipboard;
pub mod document;
pub mod errors;
pub mod expand;
pub mod loader;
pub mod logger;
pub mod mux;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use document::OutputDocument;
pub use errors::MuxError;
pub use mux::{run, MuxConfig};
