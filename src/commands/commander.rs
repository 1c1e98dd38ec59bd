//! Command orchestration and execution.
//!
//! The [`Commander`] drives one message through the whole command path:
//! invocation parsing, registry resolution, the permission gate and handler
//! execution. It owns the API clients the handlers need; the per-message
//! sender context comes in from the dispatch loop.
//!
//! # Flow
//!
//! ```text
//! chat line → parse_invocation() → Command::resolve() → gate → handler
//! ```
//!
//! Every early exit is silent: non-command messages, ignore-listed names
//! and suppressed restricted commands all produce no reply. Chatters only
//! ever see replies for commands that actually ran.

use std::collections::HashSet;

use log::debug;

use crate::commands::CommandContext;
use crate::commands::actions::{
    handle_add, handle_add_zodiac_sign, handle_alias, handle_commands, handle_hello,
    handle_horoscope, handle_remove, handle_set, handle_set_country, handle_shoutout,
    handle_text, handle_uptime,
};
use crate::commands::command::{Command, parse_invocation};
use crate::horoscope::ZodiacApi;
use crate::twitch::HelixApi;

/// Badges that may run restricted commands.
const ELEVATED_BADGES: [&str; 1] = ["broadcaster"];

/// Command orchestrator for parsing and executing bot commands.
///
/// Stateless apart from the API clients and the configured channel name;
/// all durable state flows through the store reference carried by the
/// [`CommandContext`].
pub struct Commander<H: HelixApi, Z: ZodiacApi> {
    /// Helix API client, used by `!uptime` and `!so`
    helix: H,
    /// Horoscope API client, used by `!horoscope`
    zodiac: Z,
    /// The channel the bot is joined to, used by `!uptime`
    channel: String,
}

impl<H: HelixApi, Z: ZodiacApi> Commander<H, Z> {
    /// Creates a new Commander.
    ///
    /// # Arguments
    ///
    /// * `helix` - Helix API client
    /// * `zodiac` - horoscope API client
    /// * `channel` - the channel the bot is joined to
    pub fn new(helix: H, zodiac: Z, channel: &str) -> Self {
        Commander {
            helix,
            zodiac,
            channel: channel.to_owned(),
        }
    }

    /// Whether a badge set grants the right to run restricted commands.
    fn is_elevated(badges: &HashSet<String>) -> bool {
        ELEVATED_BADGES.iter().any(|badge| badges.contains(*badge))
    }

    /// Runs one chat message through the command path.
    ///
    /// Returns the reply to send to the channel, or `None` when the message
    /// is not a command, names an ignored command, is a restricted command
    /// from an unelevated sender, or its handler chose not to answer.
    ///
    /// Restricted commands from unelevated senders are suppressed *before*
    /// the handler runs: no side effects happen and no reply leaks which
    /// commands exist.
    pub async fn dispatch(&self, message: &str, context: &CommandContext<'_>) -> Option<String> {
        let invocation = parse_invocation(message)?;
        let command = Command::resolve(invocation)?;

        if command.is_restricted() && !Self::is_elevated(context.badges) {
            debug!(
                "suppressing a restricted command from {}",
                context.user_name
            );
            return None;
        }

        self.execute(command, context).await
    }

    /// Routes a resolved command to its handler.
    async fn execute(&self, command: Command, context: &CommandContext<'_>) -> Option<String> {
        match command {
            Command::Hello => handle_hello(context.user_name),
            Command::Commands => handle_commands(context.store).await,
            Command::Uptime => handle_uptime(&self.channel, &self.helix).await,
            Command::SetCountry(input) => {
                handle_set_country(context.store, context.user_id, context.user_name, &input).await
            }
            Command::Set(input) => handle_set(context.store, &input).await,
            Command::Add(input) => handle_add(context.store, &input).await,
            Command::Remove(input) => handle_remove(context.store, &input).await,
            Command::Alias(input) => handle_alias(context.store, &input).await,
            Command::Shoutout(input) => handle_shoutout(&self.helix, &input).await,
            Command::AddZodiacSign(input) => {
                handle_add_zodiac_sign(context.store, context.user_id, context.user_name, &input)
                    .await
            }
            Command::Horoscope => {
                handle_horoscope(context.store, &self.zodiac, context.user_id, context.user_name)
                    .await
            }
            Command::Text(name) => handle_text(context.store, &name).await,
        }
    }
}
