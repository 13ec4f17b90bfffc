//! Bulk action: compose messages for the selection and deliver them.

pub mod composer;
pub mod delivery;

pub use composer::{ComposeError, Composer, MessageTemplates, DEFAULT_BODY, DEFAULT_SUBJECT};
pub use delivery::{DeliveryError, DeliveryReceipt, DeliverySink, MemorySink, OutboxFile};
