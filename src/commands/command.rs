//! Invocation parsing and the command registry.
//!
//! This module turns a raw chat line into a [`Command`] in two steps:
//!
//! 1. [`parse_invocation`] extracts the `(name, input)` pair from a
//!    `!`-prefixed message
//! 2. [`Command::resolve`] maps the name onto the closed set of command
//!    variants, falling back to [`Command::Text`] for anything that is not
//!    built in and not on the ignore list
//!
//! Whether a name means a built-in handler, a persisted text command, an
//! alias or nothing at all is decided here (built-in) or at execution time
//! (text commands and aliases, which live in the store and can change
//! between two messages).

use once_cell::sync::Lazy;
use regex::Regex;

/// Names handled by built-in command variants.
///
/// Listed by the `!commands` reply and protected from being aliased. Must
/// stay in sync with the match in [`Command::resolve`].
pub const SPECIAL_COMMANDS: [&str; 11] = [
    "add",
    "addzodiacsign",
    "alias",
    "commands",
    "hello",
    "horoscope",
    "remove",
    "set",
    "setcountry",
    "so",
    "uptime",
];

/// Names that must produce no reply at all.
///
/// These are commands of other channels' bots that chatters keep typing out
/// of habit; answering "does not exist" to each of them would be noise.
pub const COMMANDS_TO_IGNORE: [&str; 6] = ["discord", "dj", "drop", "frittata", "keyboard", "work"];

/// Matches a command invocation: `!name`, optionally followed by one
/// separating whitespace and the argument text.
static INVOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!(?P<name>\w+)\s?(?P<input>.*)").unwrap());

/// A parsed command invocation.
///
/// `name` is the word right after the `!` marker, case-sensitive. `input`
/// is the verbatim remainder of the line after one separating whitespace;
/// it is the empty string when nothing follows the name, never absent.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    /// The command name.
    pub name: String,
    /// The argument text, possibly empty.
    pub input: String,
}

/// Extracts an [`Invocation`] from a chat message.
///
/// Returns `None` when the message does not start with `!` immediately
/// followed by a word character; such messages are plain chat and the
/// dispatcher takes no further action on them.
///
/// # Examples
///
/// ```
/// let invocation = parse_invocation("!set today hi").unwrap();
/// assert_eq!(invocation.name, "set");
/// assert_eq!(invocation.input, "today hi");
/// ```
pub fn parse_invocation(message: &str) -> Option<Invocation> {
    let captures = INVOCATION.captures(message)?;

    Some(Invocation {
        name: captures["name"].to_owned(),
        input: captures["input"].to_owned(),
    })
}

/// Represents a resolved bot command.
///
/// One variant per built-in command kind, plus [`Command::Text`] for every
/// other name, which is looked up in the persisted text command store (via
/// the alias table) when it runs. Variants taking a `String` carry the raw
/// argument text; splitting it further is the handler's job, so a malformed
/// argument degrades to a silent no-reply instead of an error.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Greet the sender
    Hello,
    /// List all command names
    Commands,
    /// Report how long the channel has been live
    Uptime,
    /// Set the sender's country
    SetCountry(String),
    /// Update an existing text command: `{name} {response}`
    Set(String),
    /// Create a new text command: `{name} {response}`
    Add(String),
    /// Remove a text command: `{name}`
    Remove(String),
    /// Alias a name to an existing text command: `{alias} {target}`
    Alias(String),
    /// Shout out another channel: `{name}`
    Shoutout(String),
    /// Set the sender's zodiac sign: `{sign}`
    AddZodiacSign(String),
    /// Fetch the daily horoscope for the sender's stored sign
    Horoscope,
    /// Fallback: a persisted text command or alias, by name
    Text(String),
}

impl Command {
    /// Resolves an invocation to a command.
    ///
    /// Resolution order:
    ///
    /// 1. A name in the built-in table resolves to its variant
    /// 2. A name on [`COMMANDS_TO_IGNORE`] resolves to `None` (silence)
    /// 3. Everything else resolves to [`Command::Text`]; whether the name
    ///    actually exists is decided when the handler runs
    pub fn resolve(invocation: Invocation) -> Option<Command> {
        let Invocation { name, input } = invocation;

        let command = match name.as_str() {
            "hello" => Command::Hello,
            "commands" => Command::Commands,
            "uptime" => Command::Uptime,
            "setcountry" => Command::SetCountry(input),
            "set" => Command::Set(input),
            "add" => Command::Add(input),
            "remove" => Command::Remove(input),
            "alias" => Command::Alias(input),
            "so" => Command::Shoutout(input),
            "addzodiacsign" => Command::AddZodiacSign(input),
            "horoscope" => Command::Horoscope,
            _ if COMMANDS_TO_IGNORE.contains(&name.as_str()) => return None,
            _ => Command::Text(name),
        };

        Some(command)
    }

    /// Whether this command requires an elevated badge to run.
    ///
    /// The dispatcher checks this before execution; restricted commands
    /// from unelevated senders are dropped without running and without a
    /// reply.
    pub fn is_restricted(&self) -> bool {
        matches!(
            self,
            Command::Set(_)
                | Command::Add(_)
                | Command::Remove(_)
                | Command::Alias(_)
                | Command::Shoutout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invocation_with_input() {
        let invocation = parse_invocation("!set today hi").unwrap();

        assert_eq!(invocation.name, "set");
        assert_eq!(invocation.input, "today hi");
    }

    #[test]
    fn test_parse_invocation_without_input_has_empty_input() {
        let invocation = parse_invocation("!uptime").unwrap();

        assert_eq!(invocation.name, "uptime");
        assert_eq!(invocation.input, "");
    }

    #[test]
    fn test_parse_invocation_plain_message_is_none() {
        assert_eq!(parse_invocation("hello there"), None);
    }

    #[test]
    fn test_parse_invocation_bare_marker_is_none() {
        assert_eq!(parse_invocation("!"), None);
        assert_eq!(parse_invocation("! set"), None);
    }

    #[test]
    fn test_parse_invocation_marker_mid_message_is_none() {
        assert_eq!(parse_invocation("this is !not a command"), None);
    }

    #[test]
    fn test_parse_invocation_is_case_sensitive() {
        let invocation = parse_invocation("!Uptime").unwrap();

        // Resolution happens on the name as typed
        assert_eq!(invocation.name, "Uptime");
    }

    #[test]
    fn test_resolve_every_special_command_is_built_in() {
        for name in SPECIAL_COMMANDS {
            let command = Command::resolve(Invocation {
                name: name.to_owned(),
                input: String::new(),
            })
            .unwrap();

            assert!(
                !matches!(command, Command::Text(_)),
                "{} resolved to the text fallback",
                name
            );
        }
    }

    #[test]
    fn test_resolve_ignored_name_is_none() {
        for name in COMMANDS_TO_IGNORE {
            let resolved = Command::resolve(Invocation {
                name: name.to_owned(),
                input: String::new(),
            });

            assert_eq!(resolved, None, "{} should resolve to nothing", name);
        }
    }

    #[test]
    fn test_resolve_unknown_name_falls_back_to_text() {
        let command = Command::resolve(Invocation {
            name: "lurk".to_owned(),
            input: "whatever".to_owned(),
        })
        .unwrap();

        assert_eq!(command, Command::Text("lurk".to_owned()));
    }

    #[test]
    fn test_resolve_case_sensitive_name_falls_back_to_text() {
        let command = Command::resolve(Invocation {
            name: "Uptime".to_owned(),
            input: String::new(),
        })
        .unwrap();

        assert_eq!(command, Command::Text("Uptime".to_owned()));
    }

    #[test]
    fn test_setter_commands_are_restricted() {
        assert!(Command::Set("today hi".to_owned()).is_restricted());
        assert!(Command::Add("today hi".to_owned()).is_restricted());
        assert!(Command::Remove("today".to_owned()).is_restricted());
        assert!(Command::Alias("t today".to_owned()).is_restricted());
        assert!(Command::Shoutout("somechannel".to_owned()).is_restricted());
    }

    #[test]
    fn test_open_commands_are_not_restricted() {
        assert!(!Command::Hello.is_restricted());
        assert!(!Command::Commands.is_restricted());
        assert!(!Command::Uptime.is_restricted());
        assert!(!Command::SetCountry("fr".to_owned()).is_restricted());
        assert!(!Command::AddZodiacSign("aries".to_owned()).is_restricted());
        assert!(!Command::Horoscope.is_restricted());
        assert!(!Command::Text("today".to_owned()).is_restricted());
    }
}
