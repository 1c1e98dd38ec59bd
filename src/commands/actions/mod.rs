//! Command action handlers.
//!
//! One handler function per command kind. Each handler takes exactly the
//! typed inputs it reads and returns `Option<String>`: `Some` is sent to
//! the channel as the reply, `None` means silence.
//!
//! Handlers never check permission (the dispatcher gates restricted
//! commands before calling them) and never keep state between invocations;
//! everything durable goes through the store.

mod alias;
mod country;
mod hello;
mod list_commands;
mod shoutout;
mod text_commands;
mod uptime;
mod zodiac;

pub use crate::commands::actions::{
    alias::handle_alias,
    country::handle_set_country,
    hello::handle_hello,
    list_commands::handle_commands,
    shoutout::handle_shoutout,
    text_commands::{handle_add, handle_remove, handle_set, handle_text},
    uptime::handle_uptime,
    zodiac::{handle_add_zodiac_sign, handle_horoscope},
};
