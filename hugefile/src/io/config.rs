//! Generator settings.

use anyhow::{Result, anyhow};

use crate::core::filler::{FILLER_LINE, LINE_COUNT};

/// What `generate` writes and how it buffers.
///
/// The CLI always runs with `GeneratorConfig::default()`; other values are for
/// library callers that need a different size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Text written on every line, without the trailing newline.
    pub line: String,

    /// How many times `line` is written.
    pub line_count: u64,

    /// Capacity of the write buffer in bytes.
    pub buffer_capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            line: FILLER_LINE.to_string(),
            line_count: LINE_COUNT,
            buffer_capacity: 64 * 1024,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.line.contains(['\n', '\r']) {
            return Err(anyhow!("line must not contain line breaks"));
        }
        if self.buffer_capacity == 0 {
            return Err(anyhow!("buffer_capacity must be > 0"));
        }
        Ok(())
    }
}
