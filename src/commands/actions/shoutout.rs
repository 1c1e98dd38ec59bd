//! Shoutout command handler.
//!
//! `!so somechannel` (or `!so @somechannel`) answers with a link to another
//! channel, after checking through the Helix channel search that the
//! channel actually exists under that exact login.

use log::{debug, error};

use crate::errors::ApiError;
use crate::twitch::HelixApi;

/// Shouts out another channel.
///
/// A leading `@` on the argument is stripped, so copy-pasted mentions work.
/// The channel search returns fuzzy matches; the shoutout only goes through
/// when one of them has exactly the requested login, ignoring case. A
/// failing API produces no reply.
pub async fn handle_shoutout(helix: &impl HelixApi, input: &str) -> Option<String> {
    debug!("handling shoutout command");

    let name = input.trim().trim_start_matches('@');
    if name.is_empty() {
        return None;
    }

    let hits = match helix.search_channels(name).await {
        Ok(hits) => hits,
        Err(e) => {
            if let ApiError::Status(status) = &e {
                error!("channel search answered with status {}", status);
            } else {
                error!("channel search failed: {}", e);
            }
            return None;
        }
    };

    if hits.is_empty() {
        return Some(format!("{} doesn't seem to exist", name));
    }

    match hits
        .iter()
        .find(|hit| hit.broadcaster_login.eq_ignore_ascii_case(name))
    {
        Some(hit) => Some(format!(
            "You should check out {} over at https://www.twitch.tv/{} !",
            hit.display_name, hit.broadcaster_login
        )),
        None => Some(format!("{} is not a valid user", name)),
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::twitch::ChannelHit;
    use crate::twitch::requester::MockHelixApi;

    fn create_hit(display_name: &str, login: &str) -> ChannelHit {
        ChannelHit {
            display_name: display_name.to_owned(),
            broadcaster_login: login.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_handle_shoutout_exact_login_match() {
        let mut helix = MockHelixApi::new();
        helix
            .expect_search_channels()
            .returning(|_| Ok(vec![create_hit("DataFrittata", "datafrittata")]));

        let reply = handle_shoutout(&helix, "datafrittata").await;

        assert_eq!(
            reply.as_deref(),
            Some("You should check out DataFrittata over at https://www.twitch.tv/datafrittata !")
        );
    }

    #[tokio::test]
    async fn test_handle_shoutout_match_differing_only_in_case() {
        let mut helix = MockHelixApi::new();
        helix
            .expect_search_channels()
            .returning(|_| Ok(vec![create_hit("DataFrittata", "datafrittata")]));

        let reply = handle_shoutout(&helix, "DataFrittata").await;

        assert!(reply.unwrap().starts_with("You should check out"));
    }

    #[tokio::test]
    async fn test_handle_shoutout_strips_leading_at() {
        let mut helix = MockHelixApi::new();
        helix
            .expect_search_channels()
            .withf(|query| query == "datafrittata")
            .returning(|_| Ok(vec![create_hit("DataFrittata", "datafrittata")]));

        let reply = handle_shoutout(&helix, "@datafrittata").await;

        assert!(reply.is_some());
    }

    #[tokio::test]
    async fn test_handle_shoutout_no_hits() {
        let mut helix = MockHelixApi::new();
        helix.expect_search_channels().returning(|_| Ok(vec![]));

        let reply = handle_shoutout(&helix, "nobody").await;

        assert_eq!(reply.as_deref(), Some("nobody doesn't seem to exist"));
    }

    #[tokio::test]
    async fn test_handle_shoutout_fuzzy_hits_but_no_exact_login() {
        let mut helix = MockHelixApi::new();
        helix
            .expect_search_channels()
            .returning(|_| Ok(vec![create_hit("DataFrittata2", "datafrittata2")]));

        let reply = handle_shoutout(&helix, "datafrittata").await;

        assert_eq!(reply.as_deref(), Some("datafrittata is not a valid user"));
    }

    #[tokio::test]
    async fn test_handle_shoutout_non_success_status_is_silent() {
        let mut helix = MockHelixApi::new();
        helix
            .expect_search_channels()
            .returning(|_| Err(ApiError::Status(StatusCode::BAD_GATEWAY)));

        assert_eq!(handle_shoutout(&helix, "datafrittata").await, None);
    }

    #[tokio::test]
    async fn test_handle_shoutout_empty_argument_is_silent() {
        let helix = MockHelixApi::new();

        assert_eq!(handle_shoutout(&helix, "").await, None);
        assert_eq!(handle_shoutout(&helix, "@").await, None);
    }
}
