//! Bot module: the dispatch loop.
//!
//! This module provides the main [`Bot`] implementation connecting the
//! Twitch chat transport with the command subsystem. It owns the one place
//! where messages, persisted state and the outgoing chat line meet.
//!
//! # Message Lifecycle
//!
//! For every incoming chat message, in order:
//!
//! 1. The raw badge tag is classified into a badge set
//! 2. The line is rendered to the operator console (with the chatter's
//!    stored country as decoration, when there is one)
//! 3. The chatter's profile row is upserted (created on first sight)
//! 4. The message runs through the [`Commander`]: invocation parsing,
//!    registry resolution, permission gate, handler execution
//! 5. A non-empty reply, if any, is sent back to the channel
//!
//! Steps 1-3 happen for every message; steps 4-5 only produce output for
//! command invocations.
//!
//! # Ordering
//!
//! Messages are processed strictly one at a time, in delivery order: the
//! receive loop awaits the full handling of message N before picking up
//! N+1. Handlers that call external APIs block the loop for the duration of
//! the call - an accepted latency cost that keeps handler executions from
//! ever overlapping on the store.

use log::info;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    Args,
    badges::parse_badges,
    commands::{CommandContext, Commander},
    config::Config,
    console,
    horoscope::HoroscopeRequester,
    store::Store,
    twitch::{ChatClient, ChatEvent, HelixRequester},
    utils::get_path,
};

/// Main bot structure tying the chat transport to the command subsystem.
///
/// Created once at startup by [`Bot::new`], then consumed by
/// [`Bot::start`], which runs the dispatch loop until the connection ends
/// or the process is terminated.
pub struct Bot {
    /// Chat connection handle, used for sending replies.
    chat: ChatClient,

    /// Incoming chat events, one per message, in delivery order.
    events: UnboundedReceiver<ChatEvent>,

    /// Persisted text commands, aliases and chatter profiles.
    store: Store,

    /// Command parser and executor with its API clients.
    commander: Commander<HelixRequester, HoroscopeRequester>,
}

impl Bot {
    /// Creates a new Bot instance from configuration and command line
    /// arguments.
    ///
    /// Fetches the Helix app access token, loads (or initializes) the
    /// store file under the data directory and joins the configured
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created, the
    /// Helix authentication fails or the channel name is invalid. Errors
    /// past this point (API hiccups, send failures) are handled inside the
    /// loop instead.
    pub async fn new(config: Config, args: &Args) -> Result<Self, anyhow::Error> {
        tokio::fs::create_dir_all(&args.data).await?;

        let mut helix = HelixRequester::new(
            &config.twitch.helix_url,
            &config.twitch.auth_url,
            &config.twitch.client_id,
            &config.twitch.client_secret,
        );
        helix.authenticate().await?;

        let zodiac = HoroscopeRequester::new(&config.horoscope.url);
        let commander = Commander::new(helix, zodiac, &config.twitch.channel);

        let store = Store::new(get_path(&args.data, "store.json")).await;

        let (chat, events) = ChatClient::connect(&config.twitch)?;

        Ok(Bot {
            chat,
            events,
            store,
            commander,
        })
    }

    /// Starts the bot and processes chat messages until the stream ends.
    ///
    /// Kicks off the store's background persistence task, greets the
    /// channel, then runs the sequential dispatch loop.
    pub async fn start(mut self) {
        self.store.start_persistence_task();

        self.chat.say("Hello, I am the bot").await;

        while let Some(event) = self.events.recv().await {
            self.handle_chat_event(event).await;
        }

        info!("chat event stream ended, shutting down");
        self.store.persist().await;
    }

    /// Handles one chat message: console echo, profile upsert, command
    /// dispatch, reply.
    async fn handle_chat_event(&self, event: ChatEvent) {
        let badge_set = parse_badges(event.badges.as_deref());

        // The stored country only decorates the console line
        let country = match event.user_id.as_deref() {
            Some(user_id) => self.store.user_country(user_id).await,
            None => None,
        };
        console::render_chat_line(&event, &badge_set, country.as_deref());

        if let Some(user_id) = event.user_id.as_deref() {
            self.store.upsert_user(user_id, &event.user_name).await;
        }

        let context = CommandContext {
            store: &self.store,
            user_name: &event.user_name,
            user_id: event.user_id.as_deref(),
            badges: &badge_set,
        };

        if let Some(reply) = self.commander.dispatch(&event.message, &context).await {
            if !reply.is_empty() {
                self.chat.say(&reply).await;
            }
        }
    }
}
