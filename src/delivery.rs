//! Terminal delivery of exports

use patrol_designer_common::{DeliveryMode, Error, ExportSink, Result};
use std::io::Write;
use std::path::PathBuf;

/// Writes files to disk; "clipboard" deliveries go to stdout so they can be
/// piped into a clipboard tool.
#[derive(Debug, Clone, Default)]
pub struct TerminalSink {
    output: Option<PathBuf>,
}

impl TerminalSink {
    pub fn to_file(output: PathBuf) -> Self {
        Self { output: Some(output) }
    }

    pub fn stdout() -> Self {
        Self::default()
    }

    /// `File` when an output path was given, otherwise stdout
    pub fn mode(&self) -> DeliveryMode {
        if self.output.is_some() {
            DeliveryMode::File
        } else {
            DeliveryMode::Clipboard
        }
    }
}

impl ExportSink for TerminalSink {
    fn deliver(&mut self, json: &str, mode: DeliveryMode) -> Result<()> {
        match mode {
            DeliveryMode::File => {
                let path = self
                    .output
                    .as_ref()
                    .ok_or_else(|| Error::Delivery("no output file given".to_string()))?;
                std::fs::write(path, json)?;
                tracing::info!(path = %path.display(), "export written");
                Ok(())
            }
            DeliveryMode::Clipboard => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", json)
                    .and_then(|_| stdout.flush())
                    .map_err(|e| Error::Delivery(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_designer_common::{deliver_export, ExportOptions, PlanStore, EXPORT_FILE_NAME};
    use tempfile::tempdir;

    #[test]
    fn test_file_delivery() {
        let dir = tempdir().unwrap();
        let mut sink = TerminalSink::to_file(dir.path().join(EXPORT_FILE_NAME));
        let store = PlanStore::new();
        let options = ExportOptions { compact: true, ..ExportOptions::basic() };

        let mode = sink.mode();

        let notice = deliver_export(&store, &options, &mut sink, mode);

        assert!(notice.ok, "{}", notice.message);
        let written = std::fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
        assert_eq!(written, r#"{"positions":[{"name":"","points":[]}]}"#);
    }

    #[test]
    fn test_mode_follows_output() {
        assert_eq!(TerminalSink::stdout().mode(), DeliveryMode::Clipboard);
        assert_eq!(TerminalSink::to_file(PathBuf::from("out.json")).mode(), DeliveryMode::File);
    }

    #[test]
    fn test_stdout_delivery() {
        let mut sink = TerminalSink::stdout();
        let mode = sink.mode();
        let notice = deliver_export(&PlanStore::new(), &ExportOptions::basic(), &mut sink, mode);
        assert!(notice.ok, "{}", notice.message);
    }

    #[test]
    fn test_file_mode_without_path_fails() {
        let mut sink = TerminalSink::stdout();
        let notice = deliver_export(&PlanStore::new(), &ExportOptions::basic(), &mut sink, DeliveryMode::File);
        assert!(!notice.ok);
        assert!(notice.message.contains("no output file given"));
    }

    #[test]
    fn test_file_delivery_failure_is_reported() {
        let dir = tempdir().unwrap();
        let mut sink = TerminalSink::to_file(dir.path().join("missing").join("out.json"));
        let store = PlanStore::new();

        let notice = deliver_export(&store, &ExportOptions::basic(), &mut sink, DeliveryMode::File);

        assert!(!notice.ok);
        assert!(notice.message.starts_with("Save failed"));
    }
}
