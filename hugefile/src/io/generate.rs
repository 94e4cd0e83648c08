//! Target file creation and the sequential write loop.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::config::GeneratorConfig;
use crate::core::filler::expected_bytes;

/// What `generate` did with the target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The file was created and fully populated.
    Created { lines: u64, bytes: u64 },
    /// Something already existed at the path; nothing was touched.
    Skipped,
}

/// Create `path` and fill it with `config.line_count` lines.
///
/// If anything exists at `path` (checked once up front, and again by the
/// exclusive create), returns `Skipped` without modifying it. A dangling
/// symlink counts as existing, so nothing is written through it. A failed
/// write leaves the partial file in place.
pub fn generate(path: &Path, config: &GeneratorConfig) -> Result<GenerateOutcome> {
    config.validate()?;

    let exists = path
        .try_exists()
        .with_context(|| format!("check {}", path.display()))?;
    if exists {
        debug!(path = %path.display(), "target exists, skipping");
        return Ok(GenerateOutcome::Skipped);
    }

    let file = match create_new(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "target appeared after check, skipping");
            return Ok(GenerateOutcome::Skipped);
        }
        Err(err) => return Err(err).with_context(|| format!("create {}", path.display())),
    };
    debug!(path = %path.display(), lines = config.line_count, "writing");

    let mut writer = BufWriter::with_capacity(config.buffer_capacity, file);
    write_lines(&mut writer, config).with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    drop(writer);

    let bytes = expected_bytes(&config.line, config.line_count);
    info!(path = %path.display(), lines = config.line_count, bytes, "created");
    Ok(GenerateOutcome::Created {
        lines: config.line_count,
        bytes,
    })
}

/// Write `config.line` followed by `\n`, `config.line_count` times.
pub fn write_lines<W: Write>(writer: &mut W, config: &GeneratorConfig) -> io::Result<()> {
    let line = config.line.as_bytes();
    for _ in 0..config.line_count {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filler::{FILLER_LINE, LINE_COUNT};
    use crate::test_support::{CountingWriter, small_config};
    use std::fs;

    #[test]
    fn default_config_writes_full_line_count() {
        let mut writer = CountingWriter::default();
        write_lines(&mut writer, &GeneratorConfig::default()).expect("write");
        assert_eq!(writer.newlines, LINE_COUNT);
        assert_eq!(writer.bytes, expected_bytes(FILLER_LINE, LINE_COUNT));
    }

    #[test]
    fn creates_missing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("huge.txt");
        let config = small_config(5);

        let outcome = generate(&path, &config).expect("generate");

        assert_eq!(
            outcome,
            GenerateOutcome::Created {
                lines: 5,
                bytes: expected_bytes(FILLER_LINE, 5),
            }
        );
        let contents = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| *line == FILLER_LINE));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn existing_file_is_left_untouched() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("huge.txt");
        fs::write(&path, "keep me").expect("write");

        let outcome = generate(&path, &small_config(5)).expect("generate");

        assert_eq!(outcome, GenerateOutcome::Skipped);
        assert_eq!(fs::read(&path).expect("read"), b"keep me");
    }

    #[test]
    fn second_run_is_a_no_op() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("huge.txt");
        let config = small_config(3);

        generate(&path, &config).expect("first");
        let before = fs::read(&path).expect("read");
        let outcome = generate(&path, &config).expect("second");

        assert_eq!(outcome, GenerateOutcome::Skipped);
        assert_eq!(fs::read(&path).expect("read"), before);
    }

    #[test]
    fn existing_directory_is_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outcome = generate(temp.path(), &small_config(3)).expect("generate");
        assert_eq!(outcome, GenerateOutcome::Skipped);
        assert!(temp.path().is_dir());
    }

    #[test]
    fn missing_parent_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("no-such-dir").join("huge.txt");

        let err = generate(&path, &small_config(3)).unwrap_err();

        let msg = format!("{:#}", err);
        assert!(msg.contains("create"));
        assert!(msg.contains("huge.txt"));
        assert!(!path.exists());
    }

    #[test]
    fn zero_lines_creates_empty_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("empty.txt");

        let outcome = generate(&path, &small_config(0)).expect("generate");

        assert_eq!(outcome, GenerateOutcome::Created { lines: 0, bytes: 0 });
        assert_eq!(fs::metadata(&path).expect("metadata").len(), 0);
    }

    #[test]
    fn invalid_config_touches_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("huge.txt");
        let config = GeneratorConfig {
            line: "a\nb".to_string(),
            ..small_config(3)
        };

        assert!(generate(&path, &config).is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("target.txt");
        let link = temp.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");

        let outcome = generate(&link, &small_config(3)).expect("generate");

        assert_eq!(outcome, GenerateOutcome::Skipped);
        assert!(!target.exists());
        assert!(fs::symlink_metadata(&link).expect("link").is_symlink());
    }
}
