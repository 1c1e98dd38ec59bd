//! Country command handler.
//!
//! `!setcountry` lets a chatter record where they are watching from; the
//! stored value shows up as a tag next to their name on the operator
//! console.

use log::{debug, error};

use crate::store::Store;

/// Sets the sender's country to the lower-cased argument text.
///
/// Replies with a confirmation. Without a user id there is no profile row
/// to write to; that case is logged and produces no reply.
pub async fn handle_set_country(
    store: &Store,
    user_id: Option<&str>,
    user_name: &str,
    input: &str,
) -> Option<String> {
    debug!("handling setcountry command");

    let Some(user_id) = user_id else {
        error!("cannot set a country without a user id");
        return None;
    };

    let country = input.trim().to_lowercase();
    if country.is_empty() {
        return None;
    }

    store.set_user_country(user_id, &country).await;

    Some(format!("{}'s country is now {}", user_name, country))
}
