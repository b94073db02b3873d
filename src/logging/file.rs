//! Plugin-local append-only log file

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::logging::sink::LogSink;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text log kept in a plugin's data directory
///
/// Every failure is reported through the sink passed to each call, never
/// returned, so logging can not abort the caller.
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
    plugin_name: String,
}

impl FileLog {
    pub fn new(data_dir: &Path, file_name: &str, plugin_name: &str) -> Self {
        Self {
            path: data_dir.join(file_name),
            plugin_name: plugin_name.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the log file if it does not exist yet.
    pub fn initialize(&self, sink: &dyn LogSink) {
        if self.path.exists() {
            return;
        }

        let created = self
            .path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|_| {
                OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&self.path)
            });

        match created {
            Ok(_) => sink.info(&format!(
                "[{}] Log '{}' created successfully.",
                self.plugin_name,
                self.file_name()
            )),
            Err(e) => sink.severe(&format!(
                "[{}] Could not create log '{}': {}",
                self.plugin_name,
                self.file_name(),
                e
            )),
        }
    }

    /// Appends `text` as one line, prefixed with the local time when
    /// `with_timestamp` is set.
    pub fn log_to_file(&self, text: &str, with_timestamp: bool, sink: &dyn LogSink) {
        let timestamp = with_timestamp.then(|| Local::now().naive_local());
        let entry = format_entry(text, timestamp);

        if let Err(e) = self.append_line(&entry) {
            sink.severe(&format!(
                "[{}] Could not write to log '{}': {}",
                self.plugin_name,
                self.file_name(),
                e
            ));
        }
    }

    fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn format_entry(text: &str, timestamp: Option<NaiveDateTime>) -> String {
    match timestamp {
        Some(at) => format!("[{}] {}", at.format(TIMESTAMP_FORMAT), text),
        None => text.to_string(),
    }
}
