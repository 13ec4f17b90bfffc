//! Outbound notification payloads produced by the bulk action.

use crate::model::RecordId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One composed notification for one selected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    /// Record the message was composed for.
    pub record_id: RecordId,
    /// Recipient contact address.
    pub recipient: String,
    /// Rendered subject line.
    pub subject: String,
    /// Rendered body.
    pub body: String,
}

/// An ordered batch of messages composed in one bulk action.
///
/// Message order follows the selection enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundBatch {
    composed_at: DateTime<Utc>,
    messages: Vec<OutboundMessage>,
}

impl OutboundBatch {
    /// Create a batch stamped with the given composition time.
    pub fn new(composed_at: DateTime<Utc>, messages: Vec<OutboundMessage>) -> Self {
        Self {
            composed_at,
            messages,
        }
    }

    /// When the batch was composed.
    pub fn composed_at(&self) -> DateTime<Utc> {
        self.composed_at
    }

    /// Messages in composition order.
    pub fn messages(&self) -> &[OutboundMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if the batch has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
