//! Bulk message composer.
//!
//! Renders one outbound message per selected record from a pair of
//! Handlebars templates (subject and body).

use crate::model::{OutboundBatch, OutboundMessage, Record, RecordId, Roster};
use crate::state::selection::Selection;
use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

const SUBJECT_TEMPLATE: &str = "subject";
const BODY_TEMPLATE: &str = "body";

/// Default subject template.
pub const DEFAULT_SUBJECT: &str = "Update for {{label}}";

/// Default body template.
pub const DEFAULT_BODY: &str =
    "Hi {{name}},\n\nThere is a new update for {{label}}.{{#if link}}\nDetails: {{link}}{{/if}}\n";

/// Subject and body templates for composed messages.
///
/// Both are Handlebars templates rendered against the record's `id`, `name`,
/// `email`, `label` and `link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    /// Subject line template.
    pub subject: String,
    /// Message body template.
    pub body: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
        }
    }
}

/// Errors from building a composer or composing a batch.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Compose was requested with nothing selected.
    #[error("No records selected")]
    EmptySelection,

    /// A selected identifier is not in the roster.
    #[error("Selected record {0} is not in the roster")]
    UnknownRecord(RecordId),

    /// A template failed to parse.
    #[error("Invalid {name} template: {reason}")]
    Template {
        /// Which template (`subject` or `body`).
        name: &'static str,
        /// Parser message.
        reason: String,
    },

    /// A template failed to render for one record.
    #[error("Failed to render {name} for record {id}: {reason}")]
    Render {
        /// Which template (`subject` or `body`).
        name: &'static str,
        /// Record being rendered.
        id: RecordId,
        /// Renderer message.
        reason: String,
    },
}

#[derive(Serialize)]
struct MessageContext<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    label: &'a str,
    // Serialized as null when absent so strict mode still sees the field
    link: Option<&'a str>,
}

impl<'a> From<&'a Record> for MessageContext<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: record.id().as_str(),
            name: record.name(),
            email: record.email(),
            label: record.label(),
            link: record.link(),
        }
    }
}

/// Composes outbound batches from validated templates.
#[derive(Debug)]
pub struct Composer {
    hbs: Handlebars<'static>,
}

impl Composer {
    /// Build a composer, parsing both templates up front.
    ///
    /// # Errors
    ///
    /// Returns `ComposeError::Template` if either template does not parse.
    pub fn new(templates: &MessageTemplates) -> Result<Self, ComposeError> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);

        for (name, source) in [
            (SUBJECT_TEMPLATE, &templates.subject),
            (BODY_TEMPLATE, &templates.body),
        ] {
            hbs.register_template_string(name, source)
                .map_err(|e| ComposeError::Template {
                    name,
                    reason: e.to_string(),
                })?;
        }

        debug!("Message templates registered");
        Ok(Self { hbs })
    }

    /// Compose one message per selected record, stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`Composer::compose_at`].
    pub fn compose(
        &self,
        roster: &Roster,
        selection: &Selection,
    ) -> Result<OutboundBatch, ComposeError> {
        self.compose_at(roster, selection, Utc::now())
    }

    /// Compose one message per selected record in selection order.
    ///
    /// # Errors
    ///
    /// - `EmptySelection` if nothing is selected
    /// - `UnknownRecord` if a selected id is missing from the roster
    /// - `Render` if a template references a field that does not exist
    pub fn compose_at(
        &self,
        roster: &Roster,
        selection: &Selection,
        composed_at: DateTime<Utc>,
    ) -> Result<OutboundBatch, ComposeError> {
        if selection.is_empty() {
            return Err(ComposeError::EmptySelection);
        }

        let messages = selection
            .iter()
            .map(|id| {
                let record = roster
                    .get(id)
                    .ok_or_else(|| ComposeError::UnknownRecord(id.clone()))?;
                self.render_message(record)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = messages.len(), "Composed outbound batch");
        Ok(OutboundBatch::new(composed_at, messages))
    }

    fn render_message(&self, record: &Record) -> Result<OutboundMessage, ComposeError> {
        let context = MessageContext::from(record);
        let render = |name: &'static str| {
            self.hbs
                .render(name, &context)
                .map_err(|e| ComposeError::Render {
                    name,
                    id: record.id().clone(),
                    reason: e.to_string(),
                })
        };

        Ok(OutboundMessage {
            record_id: record.id().clone(),
            recipient: record.email().to_string(),
            subject: render(SUBJECT_TEMPLATE)?,
            body: render(BODY_TEMPLATE)?,
        })
    }
}
