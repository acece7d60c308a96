use std::borrow::Cow;

pub const PREAMBLE: &str = "Here's the compiled content from multiple files:\n\n";
pub const SEPARATOR: &str = "\n---\n\n";

/// The compiled document handed to the output sink. File contents are kept
/// as raw bytes so stdout reproduces them exactly.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    buffer: Vec<u8>,
    sections: usize,
}

impl OutputDocument {
    pub fn new() -> Self {
        OutputDocument {
            buffer: PREAMBLE.as_bytes().to_vec(),
            sections: 0,
        }
    }

    /// Appends one fenced section. The separator goes before every section
    /// but the first, so the document never ends with one.
    pub fn push_file(&mut self, path: &str, content: &[u8]) {
        if self.sections > 0 {
            self.buffer.extend_from_slice(SEPARATOR.as_bytes());
        }
        self.buffer
            .extend_from_slice(format!("### File: {}\n```\n", path).as_bytes());
        self.buffer.extend_from_slice(content);
        self.buffer.extend_from_slice(b"\n```\n");
        self.sections += 1;
    }

    pub fn sections(&self) -> usize {
        self.sections
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Text form for sinks that only take strings; invalid UTF-8 becomes
    /// U+FFFD.
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buffer)
    }
}
