//! IRC chat transport.
//!
//! Wraps the `twitch-irc` client: joins the configured channel, converts
//! each incoming `PRIVMSG` into a [`ChatEvent`] delivered on a channel, and
//! exposes [`ChatClient::say`] for sending replies.
//!
//! Everything downstream of this module works on [`ChatEvent`]s only, so
//! the dispatch logic never touches IRC specifics.

use anyhow::Context;
use log::{error, info};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use twitch_irc::{
    ClientConfig, SecureTCPTransport, TwitchIRCClient,
    login::StaticLoginCredentials,
    message::{Badge, PrivmsgMessage, RGBColor, ServerMessage},
};

use crate::config::Twitch;

type IrcClient = TwitchIRCClient<SecureTCPTransport, StaticLoginCredentials>;

/// One incoming chat message, reduced to the fields the bot consumes.
///
/// The badge list is carried as the raw comma-separated `name/version`
/// string Twitch puts on the wire; classification into a badge set happens
/// in [`crate::badges`].
#[derive(Debug, Clone)]
pub struct ChatEvent {
    /// The message text.
    pub message: String,
    /// Sender's display name.
    pub user_name: String,
    /// Sender's stable Twitch user id, when the server provided one.
    pub user_id: Option<String>,
    /// Sender's display color as `#RRGGBB`, when they have set one.
    pub color: Option<String>,
    /// Raw comma-separated badge string, when the sender has badges.
    pub badges: Option<String>,
}

/// Renders a badge list back to the raw comma-separated tag form.
fn format_badges_tag(badges: &[Badge]) -> Option<String> {
    if badges.is_empty() {
        return None;
    }

    Some(
        badges
            .iter()
            .map(|badge| format!("{}/{}", badge.name, badge.version))
            .collect::<Vec<String>>()
            .join(","),
    )
}

/// Renders a display color as a `#RRGGBB` hex string.
fn format_color(color: &RGBColor) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

impl From<PrivmsgMessage> for ChatEvent {
    fn from(message: PrivmsgMessage) -> Self {
        let badges = format_badges_tag(&message.badges);
        let color = message.name_color.as_ref().map(format_color);
        let user_id = if message.sender.id.is_empty() {
            None
        } else {
            Some(message.sender.id)
        };

        ChatEvent {
            message: message.message_text,
            user_name: message.sender.name,
            user_id,
            color,
            badges,
        }
    }
}

/// Connection to the Twitch IRC chat of a single channel.
pub struct ChatClient {
    /// Underlying IRC client handle, used for sending.
    client: IrcClient,
    /// Channel the bot has joined.
    channel: String,
}

impl ChatClient {
    /// Connects to Twitch chat and joins the configured channel.
    ///
    /// Returns the client handle for sending together with the receiving
    /// end of the event stream: one [`ChatEvent`] per chat message, in
    /// delivery order. Non-message server traffic (pings, joins, notices)
    /// is handled by the underlying client and never reaches the stream.
    ///
    /// # Errors
    ///
    /// Returns an error when the channel name fails validation. Connection
    /// problems surface later as an ended event stream, not here - the
    /// underlying client connects lazily.
    pub fn connect(config: &Twitch) -> Result<(Self, UnboundedReceiver<ChatEvent>), anyhow::Error> {
        let credentials = StaticLoginCredentials::new(
            config.bot_login.clone(),
            Some(config.oauth_token.clone()),
        );
        let client_config = ClientConfig::new_simple(credentials);
        let (mut incoming, client) = IrcClient::new(client_config);

        let (event_tx, event_rx) = mpsc::unbounded_channel();

        // Reduce the server message stream to chat events
        tokio::spawn(async move {
            while let Some(message) = incoming.recv().await {
                if let ServerMessage::Privmsg(privmsg) = message {
                    if event_tx.send(ChatEvent::from(privmsg)).is_err() {
                        break;
                    }
                }
            }
        });

        info!("joining #{}", &config.channel);
        client
            .join(config.channel.clone())
            .context("invalid channel name")?;

        Ok((
            ChatClient {
                client,
                channel: config.channel.clone(),
            },
            event_rx,
        ))
    }

    /// Sends a line of text to the joined channel.
    ///
    /// Send failures are logged and swallowed; a missed reply must not take
    /// down the dispatch loop.
    pub async fn say(&self, text: &str) {
        if let Err(e) = self.client.say(self.channel.clone(), text.to_owned()).await {
            error!("failed to send message to #{}: {}", &self.channel, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_badges_tag_joins_entries() {
        let badges = vec![
            Badge {
                name: "founder".to_owned(),
                version: "1".to_owned(),
            },
            Badge {
                name: "subscriber".to_owned(),
                version: "6".to_owned(),
            },
        ];

        assert_eq!(
            format_badges_tag(&badges).as_deref(),
            Some("founder/1,subscriber/6")
        );
    }

    #[test]
    fn test_format_badges_tag_empty_list_is_none() {
        assert_eq!(format_badges_tag(&[]), None);
    }

    #[test]
    fn test_format_color_pads_components() {
        let color = RGBColor {
            r: 0x00,
            g: 0xBF,
            b: 0xFF,
        };

        assert_eq!(format_color(&color), "#00BFFF");
    }
}
