//! Command parsing, resolution and execution.
//!
//! This module is the core of the bot: it owns the whole path from a raw
//! chat line to an optional reply string.
//!
//! # Architecture
//!
//! ```text
//! chat line
//!     │
//!     ▼
//! parse_invocation()        "!set today hi" → ("set", "today hi")
//!     │
//!     ▼
//! Command::resolve()        built-in table → ignore list → Text fallback
//!     │
//!     ▼
//! permission gate           restricted + unelevated badge set → silence
//!     │
//!     ▼
//! action handler            reads/writes the store, calls the APIs
//!     │
//!     ▼
//! Option<String>            Some(reply) is sent to the channel
//! ```
//!
//! The [`Commander`] drives these steps; see [`command`] for the parsing
//! and registry pieces and [`actions`] for the individual handlers.
//!
//! # Handler Contract
//!
//! Every handler takes exactly the typed inputs it reads (sender fields,
//! store, an API client) and returns `Option<String>`; `None` means no
//! reply is sent. Side effects happen only inside handlers, and only
//! through the store. Permission is checked once, before the handler runs,
//! never inside it.

use std::collections::HashSet;

use crate::store::Store;

mod actions;
pub mod command;
mod commander;

pub use crate::commands::commander::Commander;

/// Sender context for one command execution.
///
/// Groups the per-message fields every dispatch needs: who is asking, with
/// which badges, and against which store. Handler-specific inputs (argument
/// text, API clients) are passed to the handlers directly.
pub struct CommandContext<'a> {
    /// The persisted state handlers read and write
    pub store: &'a Store,
    /// Sender's display name
    pub user_name: &'a str,
    /// Sender's stable user id, when the transport provided one
    pub user_id: Option<&'a str>,
    /// Badge names attached to the message
    pub badges: &'a HashSet<String>,
}
