//! Operator-facing chat rendering.
//!
//! Every chat message is echoed to the terminal the bot runs in, so the
//! broadcaster can follow the conversation without a browser: badge markers
//! in their Twitch colors, the sender's name in their display color, the
//! stored country tag when the chatter has set one.
//!
//! This is purely cosmetic; nothing in the command path depends on it.

use std::collections::HashSet;

use crossterm::style::{Color, Stylize};

use crate::twitch::ChatEvent;

/// Fallback name color for chatters who never picked one.
const DEFAULT_NAME_COLOR: Color = Color::Rgb {
    r: 0xFF,
    g: 0xF4,
    b: 0x4F,
};

/// Color used for the message text.
const MESSAGE_COLOR: Color = Color::Rgb {
    r: 0x00,
    g: 0xBF,
    b: 0xFF,
};

/// Marker color for the badges worth highlighting; unknown badges are not
/// rendered.
fn badge_color(badge: &str) -> Option<Color> {
    match badge {
        "founder" => Some(Color::Rgb {
            r: 0x7F,
            g: 0x45,
            b: 0xE9,
        }),
        "subscriber" => Some(Color::Rgb {
            r: 0xFD,
            g: 0x3E,
            b: 0x81,
        }),
        "broadcaster" => Some(Color::Rgb {
            r: 0xBB,
            g: 0xD5,
            b: 0xED,
        }),
        "vip" => Some(Color::Rgb {
            r: 0x00,
            g: 0x8D,
            b: 0xD5,
        }),
        "premium" => Some(Color::Rgb {
            r: 0xA9,
            g: 0xF0,
            b: 0xEE,
        }),
        _ => None,
    }
}

/// Parses a `#RRGGBB` string into a terminal color.
fn parse_hex_color(color: &str) -> Option<Color> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb { r, g, b })
}

/// Prints one chat line to the operator terminal.
pub fn render_chat_line(event: &ChatEvent, badges: &HashSet<String>, country: Option<&str>) {
    let badge_markers: String = badges
        .iter()
        .filter_map(|badge| badge_color(badge))
        .map(|color| format!("{} ", "●".with(color)))
        .collect();

    let name_color = event
        .color
        .as_deref()
        .and_then(parse_hex_color)
        .unwrap_or(DEFAULT_NAME_COLOR);

    let country_tag = country
        .map(|country| format!(" [{}]", country))
        .unwrap_or_default();

    println!(
        "{}{}{}: {}",
        badge_markers,
        event.user_name.as_str().with(name_color).bold(),
        country_tag,
        event.message.as_str().with(MESSAGE_COLOR)
    );
}
