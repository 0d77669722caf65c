use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Destination for rendered TAP lines.
///
/// One call per protocol line; implementations terminate the line and
/// flush so the stream is complete after every hook, even if the host
/// process dies mid-run.
pub trait Sink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Default sink: the host's reporting stream.
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}").context("failed to write to stdout")?;
        out.flush().context("failed to flush stdout")?;
        Ok(())
    }
}

/// Appends each line to a report file configured by the user.
pub struct FileSink {
    file: fs::File,
}

impl FileSink {
    /// Prepare a fresh report file: any previous report at `path` is
    /// deleted first, and missing parent directories are created.
    ///
    /// A missing file is not an error; every other deletion or directory
    /// creation error aborts construction.
    pub fn create(path: &Path) -> Result<Self> {
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create report directory {}", parent.display())
                    })?;
                }
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to remove previous report {}", path.display())
                });
            }
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open report file {}", path.display()))?;
        Ok(Self { file })
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{line}").context("failed to append to report file")?;
        self.file.flush().context("failed to flush report file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_appends_newline_terminated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tap.txt");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_line("TAP version 13").unwrap();
        sink.write_line("ok 1 Chrome 90 :: Math :: adds").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "TAP version 13\nok 1 Chrome 90 :: Math :: adds\n");
    }

    #[test]
    fn file_sink_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("nested").join("tap.txt");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_line("TAP version 13").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn file_sink_discards_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tap.txt");

        let mut first = FileSink::create(&path).unwrap();
        first.write_line("old run").unwrap();
        drop(first);

        let mut second = FileSink::create(&path).unwrap();
        second.write_line("new run").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "new run\n");
    }

    #[test]
    fn file_sink_deletion_error_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path cannot be removed as a file.
        let path = dir.path().join("tap.txt");
        fs::create_dir(&path).unwrap();

        assert!(FileSink::create(&path).is_err());
    }
}
