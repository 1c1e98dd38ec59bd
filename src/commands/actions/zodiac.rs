//! Zodiac sign and horoscope command handlers.
//!
//! `!addzodiacsign` stores a sign on the sender's profile;
//! `!horoscope` fetches the daily text for whatever sign the sender stored
//! earlier. The two only communicate through the profile row, so a chatter
//! can set their sign once and ask every day.

use log::{debug, error};

use crate::horoscope::ZodiacApi;
use crate::store::Store;

/// The only accepted values for `!addzodiacsign`, lower-cased.
const ZODIAC_SIGNS: [&str; 12] = [
    "aries",
    "taurus",
    "gemini",
    "cancer",
    "leo",
    "virgo",
    "libra",
    "scorpio",
    "sagittarius",
    "capricorn",
    "aquarius",
    "pisces",
];

/// Upper-cases the first letter, for presenting a sign in a reply.
fn title_case(sign: &str) -> String {
    let mut chars = sign.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Stores the sender's zodiac sign.
///
/// The argument is lower-cased and validated against the twelve signs;
/// anything else gets a correcting reply. Without a user id there is no
/// profile row to write to; that case is logged and produces no reply.
pub async fn handle_add_zodiac_sign(
    store: &Store,
    user_id: Option<&str>,
    user_name: &str,
    input: &str,
) -> Option<String> {
    debug!("handling addzodiacsign command");

    let Some(user_id) = user_id else {
        error!("cannot set a zodiac sign without a user id");
        return None;
    };

    let sign = input.trim().to_lowercase();

    if !ZODIAC_SIGNS.contains(&sign.as_str()) {
        return Some(format!("{} is not a valid zodiac sign", sign));
    }

    store.set_user_sign(user_id, &sign).await;

    Some(format!("{}'s zodiac sign is now {}", user_name, sign))
}

/// Answers with the daily horoscope for the sender's stored sign.
///
/// A sender without a stored sign is told so. When the horoscope service
/// answers without the text field, a placeholder keeps the reply shaped;
/// when it does not answer at all, the reply says which sign failed.
pub async fn handle_horoscope(
    store: &Store,
    zodiac: &impl ZodiacApi,
    user_id: Option<&str>,
    user_name: &str,
) -> Option<String> {
    debug!("handling horoscope command");

    let sign = match user_id {
        Some(user_id) => store.user_sign(user_id).await,
        None => None,
    };

    let Some(sign) = sign else {
        return Some(format!(
            "could not find {}'s sign in the database",
            user_name
        ));
    };

    match zodiac.get_horoscope(&sign).await {
        Ok(response) => {
            let text = response
                .horoscope
                .unwrap_or_else(|| "the stars have nothing to say today".to_owned());
            Some(format!("{}: {}", title_case(&sign), text))
        }
        Err(e) => {
            error!("could not fetch a horoscope for {}: {}", sign, e);
            Some(format!(
                "could not fetch a horoscope for {}, try again later",
                sign
            ))
        }
    }
}
