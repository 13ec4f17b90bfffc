//! Delivery of composed batches.

use crate::model::{OutboundBatch, OutboundMessage};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::info;

/// Errors raised while delivering a batch.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Writing the outbox failed.
    #[error("Failed to write outbox {path}: {source}")]
    Io {
        /// Outbox path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A message could not be serialized.
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Summary of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Number of messages handed off.
    pub delivered: usize,
    /// Where they went, in operator-facing form.
    pub destination: String,
}

/// Receives composed batches.
pub trait DeliverySink: std::fmt::Debug {
    /// Hand off every message in `batch`.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` if the batch could not be stored or sent.
    fn deliver(&mut self, batch: &OutboundBatch) -> Result<DeliveryReceipt, DeliveryError>;
}

// ===== OutboxFile =====

#[derive(Serialize)]
struct OutboxEntry<'a> {
    composed_at: DateTime<Utc>,
    #[serde(flatten)]
    message: &'a OutboundMessage,
}

/// Appends messages to a JSON Lines outbox file.
#[derive(Debug, Clone)]
pub struct OutboxFile {
    path: PathBuf,
}

impl OutboxFile {
    /// Outbox at `path`. Nothing is created until the first delivery.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Outbox path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> DeliveryError {
        DeliveryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DeliverySink for OutboxFile {
    fn deliver(&mut self, batch: &OutboundBatch) -> Result<DeliveryReceipt, DeliveryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        for message in batch.messages() {
            let entry = OutboxEntry {
                composed_at: batch.composed_at(),
                message,
            };
            serde_json::to_writer(&mut writer, &entry)?;
            writer.write_all(b"\n").map_err(|e| self.io_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;

        info!(
            count = batch.len(),
            path = %self.path.display(),
            "Batch appended to outbox"
        );

        Ok(DeliveryReceipt {
            delivered: batch.len(),
            destination: self.path.display().to_string(),
        })
    }
}

// ===== MemorySink =====

/// Keeps delivered batches in memory; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    batches: Rc<RefCell<Vec<OutboundBatch>>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches delivered so far, oldest first.
    pub fn batches(&self) -> Vec<OutboundBatch> {
        self.batches.borrow().clone()
    }
}

impl DeliverySink for MemorySink {
    fn deliver(&mut self, batch: &OutboundBatch) -> Result<DeliveryReceipt, DeliveryError> {
        self.batches.borrow_mut().push(batch.clone());
        Ok(DeliveryReceipt {
            delivered: batch.len(),
            destination: "memory".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn batch(count: usize) -> OutboundBatch {
        let messages = (1..=count)
            .map(|i| OutboundMessage {
                record_id: RecordId::new(i.to_string()).unwrap(),
                recipient: format!("user{}@example.com", i),
                subject: format!("Subject {}", i),
                body: "Hello\nthere".to_string(),
            })
            .collect();
        OutboundBatch::new(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(), messages)
    }

    #[test]
    fn outbox_writes_one_json_object_per_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("outbox.jsonl");
        let mut outbox = OutboxFile::new(&path);

        let receipt = outbox.deliver(&batch(2)).unwrap();

        assert_eq!(receipt.delivered, 2);
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["record_id"], "1");
        assert_eq!(first["recipient"], "user1@example.com");
        assert_eq!(first["body"], "Hello\nthere");
        assert_eq!(first["composed_at"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn outbox_appends_across_deliveries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outbox.jsonl");
        let mut outbox = OutboxFile::new(&path);

        outbox.deliver(&batch(1)).unwrap();
        outbox.deliver(&batch(3)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);
    }

    #[test]
    fn outbox_reports_unwritable_path() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let mut outbox = OutboxFile::new(dir.path());

        let err = outbox.deliver(&batch(1)).unwrap_err();

        assert!(matches!(err, DeliveryError::Io { .. }));
    }

    #[test]
    fn memory_sink_keeps_batches_in_order() {
        let sink = MemorySink::new();
        let mut installed = sink.clone();
        installed.deliver(&batch(1)).unwrap();
        installed.deliver(&batch(2)).unwrap();

        let sizes: Vec<usize> = sink.batches().iter().map(OutboundBatch::len).collect();
        assert_eq!(sizes, vec![1, 2]);
    }
}
