use crate::clipboard::ClipboardWriter;
use crate::document::OutputDocument;
use crate::expand::expand_patterns;
use crate::loader::load_file;
use crate::MuxError;
use std::io::{self, Write};
use tracing::{debug, info, trace, warn};

/// Files above this size need `force` to be included.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 500 * 1024;

pub const CLIPBOARD_CONFIRMATION: &str = "Content successfully copied to clipboard";

#[derive(Debug, Clone)]
pub struct MuxConfig {
    pub clipboard: bool,
    pub force: bool,
    pub max_file_size: u64,
}

impl Default for MuxConfig {
    fn default() -> Self {
        MuxConfig {
            clipboard: false,
            force: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Expands `inputs`, loads every file and compiles them into one document.
pub fn compile_files(config: &MuxConfig, inputs: &[String]) -> Result<OutputDocument, MuxError> {
    debug!("Expanding file patterns");
    let file_list = expand_patterns(inputs)?;
    debug!("Resolved {} files", file_list.len());

    let mut document = OutputDocument::new();
    for file in &file_list {
        debug!("Processing file: {}", file);
        if let Some(record) = load_file(file, config)? {
            if record.binary {
                warn!(
                    "File {} appears to be binary and may not display correctly",
                    record.path
                );
            }
            trace!("Appending {} ({} bytes)", record.path, record.size);
            document.push_file(&record.path, &record.content);
        }
    }
    Ok(document)
}

/// Runs one invocation end to end: compile, then hand the document to the
/// clipboard or `out`. Every fatal condition comes back as an `Err`; a reader
/// that closes `out` early is not one.
pub fn run<C, W>(
    config: &MuxConfig,
    inputs: &[String],
    clipboard: &mut C,
    out: &mut W,
) -> Result<(), MuxError>
where
    C: ClipboardWriter + ?Sized,
    W: Write + ?Sized,
{
    let document = compile_files(config, inputs)?;
    trace!("Final content length: {}", document.as_bytes().len());

    let written = if config.clipboard {
        clipboard.write_text(&document.to_text())?;
        info!("{} files copied to clipboard", document.sections());
        write_line(out, CLIPBOARD_CONFIRMATION.as_bytes())
    } else {
        write_line(out, document.as_bytes())
    };

    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed before the document was fully written");
            Ok(())
        }
        other => other.map_err(MuxError::from),
    }
}

fn write_line<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")?;
    out.flush()
}
