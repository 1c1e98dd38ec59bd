//! Configuration file structures for the Frittata bot.
//!
//! The bot reads a YAML configuration file and merges `FRITTATA_`-prefixed
//! environment variables over it, so secrets can be kept out of the file.
//! Nested sections use `__` as the separator in the environment, e.g.
//! `FRITTATA_TWITCH__OAUTH_TOKEN` overrides `twitch.oauth_token`.
//!
//! # Configuration File Format
//!
//! ```yaml
//! twitch:
//!   # Channel to join (without the leading '#')
//!   channel: "datafrittata"
//!
//!   # Login name of the bot account
//!   bot_login: "frittata_bot"
//!
//!   # OAuth token for the bot account's chat connection
//!   oauth_token: "abcdef0123456789"
//!
//!   # Application credentials for the Helix API
//!   client_id: "your-app-client-id"
//!   client_secret: "your-app-client-secret"
//!
//! horoscope:
//!   url: "https://horoscope.example.com/daily"
//! ```
//!
//! The `twitch.helix_url`, `twitch.auth_url` and `horoscope.url` values have
//! sensible defaults and normally only need to be set in tests.

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure for the Frittata bot.
#[derive(Deserialize)]
pub struct Config {
    /// Twitch connection and API configuration
    pub twitch: Twitch,
    /// Horoscope API configuration
    #[serde(default)]
    pub horoscope: Horoscope,
}

/// Twitch connection and API configuration.
///
/// Contains the chat credentials for the IRC connection and the application
/// credentials for the Helix API.
#[derive(Deserialize)]
pub struct Twitch {
    /// Channel to join, without the leading `#`.
    pub channel: String,

    /// Login name of the bot account.
    pub bot_login: String,

    /// OAuth token used for the chat connection.
    ///
    /// This is the bot account's chat token, not an application token.
    pub oauth_token: String,

    /// Application client id for the Helix API.
    pub client_id: String,

    /// Application client secret for the Helix API.
    ///
    /// Exchanged for an app access token at startup through the
    /// client-credentials grant.
    pub client_secret: String,

    /// Base URL of the Helix API.
    #[serde(default = "default_helix_url")]
    pub helix_url: String,

    /// Base URL of the OAuth token endpoint.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
}

/// Horoscope API configuration.
#[derive(Deserialize)]
pub struct Horoscope {
    /// Base URL of the horoscope API; the sign is appended as a path
    /// segment.
    #[serde(default = "default_horoscope_url")]
    pub url: String,
}

impl Default for Horoscope {
    fn default() -> Self {
        Horoscope {
            url: default_horoscope_url(),
        }
    }
}

fn default_helix_url() -> String {
    "https://api.twitch.tv/helix".to_owned()
}

fn default_auth_url() -> String {
    "https://id.twitch.tv/oauth2".to_owned()
}

fn default_horoscope_url() -> String {
    "https://ohmanda.com/api/horoscope".to_owned()
}

impl Config {
    /// Loads the configuration from a YAML file.
    ///
    /// Values from `FRITTATA_`-prefixed environment variables take
    /// precedence over the file, with `__` separating nested sections.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file cannot be read or if the
    /// merged configuration is missing required values.
    pub fn load(path: &str) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("FRITTATA_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const CONFIG_YAML: &str = r#"
twitch:
  channel: "datafrittata"
  bot_login: "frittata_bot"
  oauth_token: "token123"
  client_id: "clientid"
  client_secret: "clientsecret"
"#;

    #[test]
    #[serial]
    fn test_load_minimal_config() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.yaml", CONFIG_YAML)?;

            let config = Config::load("config.yaml").expect("config should load");
            assert_eq!(config.twitch.channel, "datafrittata");
            assert_eq!(config.twitch.bot_login, "frittata_bot");
            assert_eq!(config.twitch.oauth_token, "token123");

            // Defaults kick in for the URLs
            assert_eq!(config.twitch.helix_url, "https://api.twitch.tv/helix");
            assert_eq!(config.twitch.auth_url, "https://id.twitch.tv/oauth2");
            assert_eq!(config.horoscope.url, "https://ohmanda.com/api/horoscope");

            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.yaml", CONFIG_YAML)?;
            jail.set_env("FRITTATA_TWITCH__OAUTH_TOKEN", "from-env");

            let config = Config::load("config.yaml").expect("config should load");
            assert_eq!(config.twitch.oauth_token, "from-env");
            assert_eq!(config.twitch.channel, "datafrittata");

            Ok(())
        });
    }

    #[test]
    #[serial]
    fn test_missing_required_value_fails() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "twitch:\n  channel: \"only\"\n")?;

            assert!(Config::load("config.yaml").is_err());

            Ok(())
        });
    }
}
