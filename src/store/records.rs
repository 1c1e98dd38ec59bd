//! Persisted record types for the bot's data store.
//!
//! These structures are serialized to JSON as one document; see
//! [`StoreLoader`](crate::store::StoreLoader) for the file handling.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete persisted state of the bot.
///
/// Three maps, each keyed by the value that must stay unique:
///
/// - `commands`: text command name → response text
/// - `aliases`: alias name → target text command name
/// - `users`: Twitch user id → chatter profile
///
/// Aliases are not validated against `commands` here; an alias whose target
/// has been removed stays in the map and resolves to a name without a
/// response (the fallback handler then answers "does not exist").
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreData {
    /// Text command responses, keyed by command name.
    pub commands: HashMap<String, String>,
    /// Alias redirections, keyed by alias name.
    pub aliases: HashMap<String, String>,
    /// Chatter profiles, keyed by Twitch user id.
    pub users: HashMap<String, UserProfile>,
}

/// Profile row for a chatter.
///
/// Created the first time a user id shows up in chat and never deleted.
/// The optional fields are filled in by the chatter themself through
/// `!setcountry` and `!addzodiacsign`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name at the time the profile was created.
    pub user_name: String,
    /// Timestamp of the first message seen from this chatter.
    pub first_chatted_at: DateTime<Utc>,
    /// Country code, as set by the chatter.
    pub country: Option<String>,
    /// Zodiac sign, as set by the chatter.
    pub zodiac_sign: Option<String>,
}

impl UserProfile {
    /// Creates a fresh profile for a chatter seen now for the first time.
    pub fn new(user_name: &str) -> Self {
        UserProfile {
            user_name: user_name.to_owned(),
            first_chatted_at: Utc::now(),
            country: None,
            zodiac_sign: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_has_no_optional_fields() {
        let profile = UserProfile::new("DataFrittata");

        assert_eq!(profile.user_name, "DataFrittata");
        assert_eq!(profile.country, None);
        assert_eq!(profile.zodiac_sign, None);
    }

    #[test]
    fn test_store_data_round_trips_through_json() {
        let mut data = StoreData::default();
        data.commands
            .insert("today".to_owned(), "today is not set yet".to_owned());
        data.aliases.insert("t".to_owned(), "today".to_owned());
        data.users
            .insert("1234".to_owned(), UserProfile::new("DataFrittata"));

        let serialized = serde_json::to_string(&data).unwrap();
        let deserialized: StoreData = serde_json::from_str(&serialized).unwrap();

        assert_eq!(
            deserialized.commands.get("today").map(String::as_str),
            Some("today is not set yet")
        );
        assert_eq!(
            deserialized.aliases.get("t").map(String::as_str),
            Some("today")
        );
        assert_eq!(deserialized.users.get("1234"), data.users.get("1234"));
    }
}
