use crate::constants::BINARY_SNIFF_LEN;
use std::path::PathBuf;

/// A single in-flight file travelling through the pipeline.
///
/// The pipeline exclusively owns the record set for one run; records are
/// created by the read stage and consumed by the write stage.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Absolute path the content was read from.
    pub source: PathBuf,
    /// Path relative to the source base, forward-slash separated.
    pub relative: String,
    /// Raw content; replaced in place by the render stage.
    pub content: Vec<u8>,
}

impl FileRecord {
    /// Treats content with a NUL byte in the leading window as binary.
    pub fn is_binary(&self) -> bool {
        let window = &self.content[..self.content.len().min(BINARY_SNIFF_LEN)];
        window.contains(&0)
    }

    /// Returns the content as text when it can be rendered: valid UTF-8
    /// without binary markers.
    pub fn text_content(&self) -> Option<&str> {
        if self.is_binary() {
            return None;
        }
        std::str::from_utf8(&self.content).ok()
    }
}
