//! HTTP client for the daily horoscope API.

use log::{debug, info};
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ApiError;

/// Response from `GET /{sign}`.
#[derive(Deserialize, Debug)]
pub struct HoroscopeResponse {
    /// The daily horoscope text; optional because the service occasionally
    /// returns a payload without it.
    pub horoscope: Option<String>,
}

/// Trait for fetching horoscopes.
///
/// This trait abstracts the HTTP operation for easier testing with mocks.
#[automock]
pub trait ZodiacApi {
    /// Fetches the daily horoscope for a zodiac sign.
    async fn get_horoscope(&self, sign: &str) -> Result<HoroscopeResponse, ApiError>;
}

/// HTTP client for requesting data from the horoscope service.
pub struct HoroscopeRequester {
    /// Horoscope service base url
    url: String,
    /// HTTP client
    client: Client,
}

impl HoroscopeRequester {
    /// Create a new [HoroscopeRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - Base URL of the horoscope service; the sign is appended as
    ///   a path segment.
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::new();
        HoroscopeRequester {
            url: url.to_owned(),
            client,
        }
    }
}

impl ZodiacApi for HoroscopeRequester {
    /// Request `/{sign}` to get the daily horoscope.
    ///
    /// The endpoint answers with a json object:
    /// ```
    /// { "horoscope": "Today is a good day to refactor." }
    /// ```
    async fn get_horoscope(&self, sign: &str) -> Result<HoroscopeResponse, ApiError> {
        let url = format!("{}/{}", &self.url, sign);
        info!("request horoscope for {}", sign);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let horoscope: HoroscopeResponse = response.json().await?;

        debug!("response from {} -> {:?}", &url, &horoscope);

        Ok(horoscope)
    }
}
