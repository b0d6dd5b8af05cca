//! Append-only JSONL event log.
//!
//! One serialized [`Event`] per line. The file is opened in append mode so a
//! crashed run never truncates earlier entries.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::event::Event;

/// Errors that can occur while writing the event log.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error opening or writing the log file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Event could not be serialized
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes events to a JSONL file, one event per line.
pub struct EventLogger {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl EventLogger {
    /// Opens (or creates) the log file at `path` in append mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoggerError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Appends a single event.
    pub fn log(&mut self, event: &Event) -> Result<(), LoggerError> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Appends a batch of events and flushes.
    pub fn log_batch(&mut self, events: &[Event]) -> Result<(), LoggerError> {
        for event in events {
            self.log(event)?;
        }
        self.flush()
    }

    /// Flushes buffered entries to disk.
    pub fn flush(&mut self) -> Result<(), LoggerError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
