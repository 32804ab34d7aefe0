//! Report output
//!
//! [`ReportSink`] abstracts where rendered report text ends up when the user
//! names an output file. Sink failures are logged and reported back as a
//! message; they never fail the command that produced the report.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::error::{MoneyTrackError, MoneyTrackResult};

/// Destination for rendered reports
pub trait ReportSink {
    /// Write `content` under `filename`, returning where it landed
    fn write(&self, filename: &str, content: &str) -> MoneyTrackResult<PathBuf>;
}

/// Writes reports as files inside a directory
pub struct FileReportSink {
    dir: PathBuf,
}

impl FileReportSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSink for FileReportSink {
    fn write(&self, filename: &str, content: &str) -> MoneyTrackResult<PathBuf> {
        // Bare file names only; reports never leave the directory
        let requested = Path::new(filename);
        let name = requested
            .file_name()
            .filter(|name| *name == requested.as_os_str())
            .ok_or_else(|| {
                MoneyTrackError::Validation(format!("Invalid report file name: '{}'", filename))
            })?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            MoneyTrackError::Io(format!(
                "Failed to create reports directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(name);
        fs::write(&path, content).map_err(|e| {
            MoneyTrackError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(path)
    }
}

/// Return `content` for display, or write it to `output` and return a
/// confirmation line.
pub fn deliver(content: String, output: Option<&str>, sink: &dyn ReportSink) -> String {
    let Some(filename) = output else {
        return content;
    };

    match sink.write(filename, &content) {
        Ok(path) => format!("Report written to {}", path.display()),
        Err(e) => {
            error!(file = filename, error = %e, "failed to write report");
            format!("Failed to write report '{}': {}", filename, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FailingSink;

    impl ReportSink for FailingSink {
        fn write(&self, _filename: &str, _content: &str) -> MoneyTrackResult<PathBuf> {
            Err(MoneyTrackError::Io("disk full".into()))
        }
    }

    #[test]
    fn test_inline_when_no_file() {
        let sink = FailingSink;
        assert_eq!(deliver("report".into(), None, &sink), "report");
    }

    #[test]
    fn test_writes_into_reports_dir() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileReportSink::new(temp_dir.path().join("reports"));

        let message = deliver("hello".into(), Some("summary.txt"), &sink);

        let path = temp_dir.path().join("reports").join("summary.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(message.starts_with("Report written to"));
        assert!(message.ends_with("summary.txt"));
    }

    #[test]
    fn test_failure_becomes_message() {
        let message = deliver("hello".into(), Some("out.txt"), &FailingSink);
        assert!(message.starts_with("Failed to write report 'out.txt'"));
        assert!(message.contains("disk full"));
    }

    #[test]
    fn test_rejects_paths() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileReportSink::new(temp_dir.path().join("reports"));

        assert!(sink.write("../escape.txt", "x").unwrap_err().is_validation());
        assert!(sink.write("", "x").unwrap_err().is_validation());
        assert!(!temp_dir.path().join("escape.txt").exists());
    }
}
