//! Event log file written while the hunt runs.
//!
//! Every hunt event becomes one line in the output file, in the column
//! format of [`HuntEvent`]'s `Display`. Lines can also be echoed to stdout.
//! The file is truncated when the log is created, so each run starts clean.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use haunt_core::{EventSink, HuntEvent};
use tracing::{debug, warn};

pub struct EventLog {
    writer: Mutex<BufWriter<File>>,
    echo: bool,
    write_failed: AtomicBool,
}

impl EventLog {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: impl AsRef<Path>, echo: bool) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to open event log {}", path.display()))?;
        debug!(path = %path.display(), "Event log opened");

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            echo,
            write_failed: AtomicBool::new(false),
        })
    }

    /// Append free-form text, such as the final summary.
    pub fn append(&self, text: &str) -> Result<()> {
        let mut writer = self.writer();
        writer
            .write_all(text.as_bytes())
            .context("Failed to write to event log")?;
        writer.flush().context("Failed to flush event log")
    }

    pub fn flush(&self) -> Result<()> {
        self.writer().flush().context("Failed to flush event log")
    }

    fn writer(&self) -> MutexGuard<'_, BufWriter<File>> {
        match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl EventSink for EventLog {
    fn record(&self, event: &HuntEvent) {
        let line = event.to_string();
        // Echo under the file lock so stdout and the file agree on order.
        let mut writer = self.writer();
        if let Err(e) = writeln!(writer, "{}", line) {
            if !self.write_failed.swap(true, Ordering::Relaxed) {
                warn!("Failed to write event log: {}", e);
            }
        }
        if self.echo {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haunt_core::ExitReason;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("haunt-{}-{}.txt", name, std::process::id()))
    }

    #[test]
    fn records_one_line_per_event() {
        let path = temp_path("lines");
        let log = EventLog::create(&path, false).unwrap();
        log.record(&HuntEvent::GhostMove {
            room: "Kitchen".into(),
        });
        log.record(&HuntEvent::GhostExit {
            reason: ExitReason::Bored,
        });
        log.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Ghost has moved into [Kitchen]"));
        assert!(lines[1].starts_with("[GHOST EXIT]"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn create_truncates_previous_run() {
        let path = temp_path("truncate");
        std::fs::write(&path, "stale line\n").unwrap();

        let log = EventLog::create(&path, false).unwrap();
        log.append("fresh\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "fresh\n");
        std::fs::remove_file(&path).unwrap();
    }
}
