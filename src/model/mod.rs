//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod outbound;
pub mod record;

// Re-export for convenience
pub use error::{AppError, RosterError};
pub use identifiers::{InvalidRecordId, RecordId};
pub use key_action::KeyAction;
pub use outbound::{OutboundBatch, OutboundMessage};
pub use record::{Record, Roster};
