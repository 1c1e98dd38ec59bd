//! Twitch integration: IRC chat transport and Helix API client.
//!
//! # Modules
//!
//! - `chat` - the IRC connection, turning `PRIVMSG`s into [`ChatEvent`]s
//!   and sending replies back to the channel
//! - `requester` - HTTP client for the Helix API (stream status and channel
//!   search) behind the mockable [`HelixApi`] trait
//! - `response_structs` - data structures for Helix API responses

pub mod chat;
pub mod requester;
mod response_structs;

pub use crate::twitch::chat::{ChatClient, ChatEvent};
pub use crate::twitch::requester::{HelixApi, HelixRequester};
pub use crate::twitch::response_structs::{ChannelHit, StreamData};
