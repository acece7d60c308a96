use crate::MuxError;
use arboard::Clipboard;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, trace};

/// Destination for the compiled document when the clipboard flag is set.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), MuxError>;
}

/// The OS clipboard.
///
/// On X11 and Wayland an `arboard` handle only serves the selection while the
/// process is alive, so the helpers that keep serving after exit (`wl-copy`,
/// `xclip`, `xsel`) are tried first. `arboard` is the fallback everywhere and
/// the only backend elsewhere. Its handle is opened on first use so stdout
/// runs never touch the display server.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard { clipboard: None }
    }

    fn write_with_arboard(&mut self, text: &str) -> Result<(), MuxError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => {
                debug!("Initializing clipboard");
                Clipboard::new().map_err(|e| MuxError::ClipboardInitError(e.to_string()))?
            }
        };
        let clipboard = self.clipboard.insert(clipboard);

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| MuxError::ClipboardWriteError(e.to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), MuxError> {
        for command in persistent_helpers() {
            match pipe_to_command(command, text) {
                Ok(()) => {
                    debug!("Copied to clipboard with {}", command[0]);
                    return Ok(());
                }
                Err(e) => trace!("{}", e),
            }
        }
        self.write_with_arboard(text)
    }
}

/// Spawns `command` and writes `text` to its stdin. Succeeds only when the
/// command exits with status zero.
pub fn pipe_to_command(command: &[&str], text: &str) -> Result<(), MuxError> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| MuxError::ClipboardWriteError("empty clipboard command".to_string()))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| MuxError::ClipboardWriteError(format!("{}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| MuxError::ClipboardWriteError(format!("{}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| MuxError::ClipboardWriteError(format!("{}: {}", program, e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(MuxError::ClipboardWriteError(format!(
            "{} exited with {}",
            program, status
        )))
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn persistent_helpers() -> &'static [&'static [&'static str]] {
    &[
        &["wl-copy"],
        &["xclip", "-selection", "clipboard"],
        &["xsel", "--clipboard", "--input"],
    ]
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn persistent_helpers() -> &'static [&'static [&'static str]] {
    &[]
}
