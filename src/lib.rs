//! rollcall
//!
//! Terminal roster browser: search records by name, page through them,
//! select records individually or all at once, and compose a bulk message
//! for the selection.
//!
//! Follows a Pure Core / Impure Shell layout: `model` and `state` hold the
//! data and the view-state engine with no I/O; `source`, `action`, `config`,
//! `logging` and `view` talk to files and the terminal.

pub mod action;
pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
