//! HTTP client for the Twitch Helix API.
//!
//! This module provides the [`HelixRequester`] for the two Helix endpoints
//! the bot uses (live stream lookup and channel search), plus the
//! client-credentials token fetch performed once at startup.

use log::{debug, info};
use mockall::automock;
use reqwest::Client;

use crate::errors::ApiError;
use crate::twitch::response_structs::{
    ChannelHit, ChannelsResponse, StreamData, StreamsResponse, TokenResponse,
};

/// HTTP client for requesting data from the Helix API.
///
/// Holds the app access token obtained through
/// [`HelixRequester::authenticate`]; requests made before authenticating
/// will be rejected by the API with a 401.
pub struct HelixRequester {
    /// Helix API base url
    url: String,
    /// OAuth token endpoint base url
    auth_url: String,
    /// Application client id
    client_id: String,
    /// Application client secret
    client_secret: String,
    /// App access token, empty until [`HelixRequester::authenticate`] runs
    token: String,
    /// HTTP client
    client: Client,
}

/// Trait for making requests to the Helix API.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait HelixApi {
    /// Fetches the live stream entry for a channel.
    ///
    /// Returns `None` when the channel is not currently live.
    async fn get_stream(&self, channel: &str) -> Result<Option<StreamData>, ApiError>;

    /// Searches channels matching a query string.
    async fn search_channels(&self, query: &str) -> Result<Vec<ChannelHit>, ApiError>;
}

impl HelixRequester {
    /// Create a new [HelixRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - Base URL of the Helix API.
    /// * `auth_url` - Base URL of the OAuth token endpoint.
    /// * `client_id` - Application client id.
    /// * `client_secret` - Application client secret.
    pub fn new(url: &str, auth_url: &str, client_id: &str, client_secret: &str) -> Self {
        let client = reqwest::Client::new();
        HelixRequester {
            url: url.to_owned(),
            auth_url: auth_url.to_owned(),
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
            token: String::new(),
            client,
        }
    }

    /// Exchanges the application credentials for an app access token.
    ///
    /// Request `POST {auth_url}/token` with the client-credentials grant and
    /// stores the returned token for subsequent Helix requests.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] when the token endpoint answers with a
    /// non-success status, [`ApiError::Http`] on transport failures.
    pub async fn authenticate(&mut self) -> Result<(), ApiError> {
        let url = format!("{}/token", &self.auth_url);
        info!("requesting an app access token");

        let response = self
            .client
            .post(&url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let token: TokenResponse = response.json().await?;
        self.token = token.access_token;

        Ok(())
    }
}

impl HelixApi for HelixRequester {
    /// Request `/streams?user_login={channel}` to get the channel's live
    /// stream entry.
    ///
    /// The endpoint answers with a json array of live streams:
    /// ```
    /// { "data": [{ "started_at": "2024-03-01T18:30:00Z", ... }] }
    /// ```
    /// An empty array means the channel is offline, which this method maps
    /// to `Ok(None)`.
    async fn get_stream(&self, channel: &str) -> Result<Option<StreamData>, ApiError> {
        let url = format!("{}/streams", &self.url);
        info!("request stream status of {}", channel);
        debug!("request {}?user_login={}", &url, channel);

        let response = self
            .client
            .get(&url)
            .query(&[("user_login", channel)])
            .bearer_auth(&self.token)
            .header("Client-Id", &self.client_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let streams: StreamsResponse = response.json().await?;

        debug!("response from {} -> {:?}", &url, &streams);

        Ok(streams.data.into_iter().next())
    }

    /// Request `/search/channels?query={name}` to find channels by name.
    ///
    /// The endpoint answers with a json array of matching channels:
    /// ```
    /// { "data": [{ "display_name": "...", "broadcaster_login": "...", ... }] }
    /// ```
    async fn search_channels(&self, query: &str) -> Result<Vec<ChannelHit>, ApiError> {
        let url = format!("{}/search/channels", &self.url);
        info!("request channel search for {}", query);
        debug!("request {}?query={}", &url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .bearer_auth(&self.token)
            .header("Client-Id", &self.client_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let channels: ChannelsResponse = response.json().await?;

        debug!("response from {} -> {:?}", &url, &channels);

        Ok(channels.data)
    }
}
