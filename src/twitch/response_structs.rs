//! Response structures for Helix API endpoints.
//!
//! Only the fields the bot consumes are declared; everything else in the
//! payloads is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response from the OAuth token endpoint (client-credentials grant).
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    /// App access token to present on Helix requests.
    pub access_token: String,
}

/// Response from `/streams?user_login={channel}`.
///
/// The `data` array is empty when the channel is offline.
#[derive(Deserialize, Debug)]
pub struct StreamsResponse {
    pub data: Vec<StreamData>,
}

/// A single live stream entry from `/streams`.
#[derive(Deserialize, Debug, Clone)]
pub struct StreamData {
    /// UTC timestamp of when the stream went live.
    pub started_at: DateTime<Utc>,
}

/// Response from `/search/channels?query={name}`.
#[derive(Deserialize, Debug)]
pub struct ChannelsResponse {
    pub data: Vec<ChannelHit>,
}

/// A single channel returned by the channel search.
#[derive(Deserialize, Debug, Clone)]
pub struct ChannelHit {
    /// Channel name as displayed, with the owner's capitalization.
    pub display_name: String,
    /// Lowercase login name, usable in a channel URL.
    pub broadcaster_login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streams_response_deserializes_started_at() {
        let body = r#"{"data": [{"id": "1", "started_at": "2024-03-01T18:30:00Z"}]}"#;
        let response: StreamsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(
            response.data[0].started_at.to_rfc3339(),
            "2024-03-01T18:30:00+00:00"
        );
    }

    #[test]
    fn test_empty_streams_response_means_offline() {
        let body = r#"{"data": []}"#;
        let response: StreamsResponse = serde_json::from_str(body).unwrap();

        assert!(response.data.is_empty());
    }

    #[test]
    fn test_channels_response_keeps_login_and_display_name() {
        let body = r#"{"data": [{"display_name": "DataFrittata", "broadcaster_login": "datafrittata", "is_live": true}]}"#;
        let response: ChannelsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.data[0].display_name, "DataFrittata");
        assert_eq!(response.data[0].broadcaster_login, "datafrittata");
    }
}
