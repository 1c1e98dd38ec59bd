//! Frittata - a Twitch chat bot with persisted text commands.
//!
//! This is the main entry point for the Frittata bot, which joins a single
//! Twitch channel over IRC, watches the chat for `!`-prefixed commands and
//! answers them in the channel.
//!
//! # Overview
//!
//! The bot recognizes a fixed set of built-in commands (`!hello`, `!uptime`,
//! `!so`, profile commands, moderation commands) and an open-ended set of
//! text commands that the broadcaster can create, edit and alias from chat
//! at runtime. Text commands, aliases and chatter profiles are persisted to
//! a JSON file between restarts.
//!
//! # Features
//!
//! - **Text Commands**: `!add`, `!set`, `!remove` manage named responses
//!   from chat; any other `!name` message replays the stored response
//! - **Aliases**: `!alias` points a second name at an existing text command
//! - **Chatter Profiles**: every chatter gets a profile row on their first
//!   message; `!setcountry` and `!addzodiacsign` fill it in
//! - **Stream Info**: `!uptime` reports how long the channel has been live,
//!   `!so` shouts out another channel, both through the Helix API
//! - **Horoscopes**: `!horoscope` fetches the daily text for the chatter's
//!   stored zodiac sign
//! - **Permission Gate**: editing commands is reserved for the broadcaster,
//!   based on the badges Twitch attaches to each message
//! - **Operator Console**: every chat line is rendered to the terminal with
//!   badge markers and the chatter's display color
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! twitch:
//!   channel: "yourchannel"
//!   bot_login: "yourbotaccount"
//!   oauth_token: "abcdef..."
//!   client_id: "your-app-client-id"
//!   client_secret: "your-app-client-secret"
//! ```
//!
//! Any value can be overridden from the environment with the `FRITTATA_`
//! prefix, e.g. `FRITTATA_TWITCH__OAUTH_TOKEN=...`.
//!
//! # Usage
//!
//! ```bash
//! frittata --config config.yaml --data ./frittata-data
//! ```
//!
//! # Architecture
//!
//! - [`badges`] - badge string classification for the permission gate
//! - [`bot`] - the dispatch loop tying chat events to command execution
//! - [`commands`] - invocation parsing, the command registry and handlers
//! - [`config`] - YAML configuration loading with environment overrides
//! - [`console`] - operator-facing chat rendering
//! - [`horoscope`] - horoscope API client
//! - [`store`] - persisted text commands, aliases and chatter profiles
//! - [`twitch`] - IRC transport and Helix API client
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - controls the logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod badges;
mod bot;
mod commands;
mod config;
mod console;
mod errors;
mod horoscope;
mod store;
mod twitch;
mod utils;

/// Command-line arguments for the Frittata bot.
///
/// Most configuration lives in the YAML file (see [`config::Config`]); the
/// command line only locates that file and the data directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file.
    ///
    /// The configuration file contains the Twitch credentials and channel
    /// name. See the [`config`] module for the expected format. Every value
    /// can be overridden with a `FRITTATA_`-prefixed environment variable.
    #[arg(short, long)]
    config: String,

    /// Path to the directory for storing persistent data.
    ///
    /// This directory will contain `store.json`, the file holding the text
    /// commands, aliases and chatter profiles.
    #[arg(short, long)]
    pub data: String,
}

/// Main entry point for the Frittata bot.
///
/// Initializes logging, parses the command line, loads the configuration and
/// hands control to [`Bot::start`], which runs until the process terminates.
///
/// Configuration and startup errors are logged and cause an early return;
/// errors during operation (network hiccups, malformed messages, API
/// failures) are handled inside the dispatch loop and never tear the bot
/// down.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting frittata {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable overrides
    let config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Launch bot
    let bot = match Bot::new(config, &args).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };
    bot.start().await;
}
