//! Test-only helpers shared by unit and integration tests.

use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use crate::io::config::GeneratorConfig;

/// Writer that discards data and counts bytes and newlines.
#[derive(Debug, Default)]
pub struct CountingWriter {
    pub bytes: u64,
    pub newlines: u64,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes += buf.len() as u64;
        self.newlines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Default config with a reduced line count, for fast on-disk tests.
pub fn small_config(line_count: u64) -> GeneratorConfig {
    GeneratorConfig {
        line_count,
        ..GeneratorConfig::default()
    }
}

/// Scratch directory plus a not-yet-existing target path inside it.
pub fn temp_target(name: &str) -> io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    Ok((dir, path))
}
