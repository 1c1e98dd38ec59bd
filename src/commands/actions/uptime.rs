//! Uptime command handler.
//!
//! Reports how long the configured channel has been live, based on the
//! `started_at` timestamp the Helix API attaches to a live stream entry.

use chrono::{Duration, Utc};
use log::{debug, error};

use crate::twitch::HelixApi;

/// Formats an elapsed duration as the uptime reply.
///
/// The hours clause is omitted entirely while the stream is in its first
/// hour.
fn format_uptime(elapsed: Duration) -> String {
    let total_seconds = elapsed.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!(
            "We've been online for {} hours, {} minutes and {} seconds",
            hours, minutes, seconds
        )
    } else {
        format!(
            "We've been online for {} minutes and {} seconds",
            minutes, seconds
        )
    }
}

/// Answers with the channel's current uptime.
///
/// Offline channels get a fixed "not currently streaming" reply. An API
/// failure is logged and produces no reply; the stream status is not
/// something worth guessing at.
pub async fn handle_uptime(channel: &str, helix: &impl HelixApi) -> Option<String> {
    debug!("handling uptime command");

    let stream = match helix.get_stream(channel).await {
        Ok(stream) => stream,
        Err(e) => {
            error!("could not fetch the stream status: {}", e);
            return None;
        }
    };

    let Some(stream) = stream else {
        return Some(format!("{} is not currently streaming", channel));
    };

    Some(format_uptime(Utc::now() - stream.started_at))
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::errors::ApiError;
    use crate::twitch::StreamData;
    use crate::twitch::requester::MockHelixApi;

    #[test]
    fn test_format_uptime_under_an_hour_omits_hours_clause() {
        let reply = format_uptime(Duration::minutes(2));

        assert_eq!(reply, "We've been online for 2 minutes and 0 seconds");
    }

    #[test]
    fn test_format_uptime_with_hours_clause() {
        let reply = format_uptime(Duration::hours(2));

        assert_eq!(reply, "We've been online for 2 hours, 0 minutes and 0 seconds");
    }

    #[test]
    fn test_format_uptime_mixed_components() {
        let elapsed = Duration::hours(1) + Duration::minutes(30) + Duration::seconds(5);

        assert_eq!(
            format_uptime(elapsed),
            "We've been online for 1 hours, 30 minutes and 5 seconds"
        );
    }

    #[test]
    fn test_format_uptime_negative_clock_skew_clamps_to_zero() {
        let reply = format_uptime(Duration::seconds(-30));

        assert_eq!(reply, "We've been online for 0 minutes and 0 seconds");
    }

    #[tokio::test]
    async fn test_handle_uptime_offline_channel() {
        let mut helix = MockHelixApi::new();
        helix.expect_get_stream().returning(|_| Ok(None));

        let reply = handle_uptime("datafrittata", &helix).await;

        assert_eq!(
            reply.as_deref(),
            Some("datafrittata is not currently streaming")
        );
    }

    #[tokio::test]
    async fn test_handle_uptime_live_channel() {
        let mut helix = MockHelixApi::new();
        helix.expect_get_stream().returning(|_| {
            Ok(Some(StreamData {
                started_at: Utc::now() - Duration::minutes(2),
            }))
        });

        let reply = handle_uptime("datafrittata", &helix).await.unwrap();

        assert!(reply.starts_with("We've been online for"));
        assert!(!reply.contains("hours"));
    }

    #[tokio::test]
    async fn test_handle_uptime_api_failure_is_silent() {
        let mut helix = MockHelixApi::new();
        helix
            .expect_get_stream()
            .returning(|_| Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));

        assert_eq!(handle_uptime("datafrittata", &helix).await, None);
    }
}
