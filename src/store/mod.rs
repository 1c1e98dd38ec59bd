//! Persisted state: text commands, aliases and chatter profiles.
//!
//! This module is the only owner of durable state. Handlers read and write
//! through the [`Store`] API and never hold on to data between invocations,
//! so every dispatch sees the latest state.
//!
//! # Persistence Model
//!
//! The store keeps everything in memory behind a mutex and periodically
//! writes the whole data set to a JSON file (see [`StoreLoader`]). On
//! startup the file is read back and the seed commands are inserted if they
//! are missing, which also covers the very first run.
//!
//! # Modules
//!
//! - `loader` - JSON file loading and saving
//! - `records` - the serialized record types

use std::{sync::Arc, time::Duration};

use log::debug;
use tokio::{sync::Mutex, time};

use crate::errors::StoreError;

mod loader;
mod records;

pub use crate::store::loader::StoreLoader;
pub use crate::store::records::{StoreData, UserProfile};

/// Interval in seconds between automatic store persistence operations.
const SAVE_INTERVAL_SECS: u64 = 60; // 1 minute

/// Text commands inserted on first startup.
const SEED_COMMANDS: [(&str, &str); 3] = [
    ("today", "today is not set yet"),
    ("source", "no source code or repo provided yet"),
    (
        "bot",
        "We're building this bot live on stream, come hang out and watch it grow",
    ),
];

/// Persisted key-value state shared by all command handlers.
///
/// Wraps the in-memory [`StoreData`] in a mutex so that concurrent access
/// from the dispatch loop and the background persistence task is
/// serialized. Uniqueness of command and alias names is enforced here: the
/// creating operations fail with a [`StoreError`] instead of overwriting.
pub struct Store {
    /// Thread-safe reference to the in-memory data
    data: Arc<Mutex<StoreData>>,
    /// Loader for persisting and loading the data from disk
    loader: StoreLoader,
}

impl Store {
    /// Creates a new `Store`, loading existing data from disk.
    ///
    /// Missing seed commands (`today`, `source`, `bot`) are inserted, which
    /// also initializes a brand-new store file on first run.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file where the data is persisted
    pub async fn new(path: String) -> Self {
        let loader = StoreLoader::new(path);
        let mut data = loader.load().await;

        for (name, response) in SEED_COMMANDS {
            data.commands
                .entry(name.to_owned())
                .or_insert_with(|| response.to_owned());
        }

        Store {
            data: Arc::new(Mutex::new(data)),
            loader,
        }
    }

    /// Starts a background task that periodically persists the data to
    /// disk.
    ///
    /// The task runs indefinitely, saving every [`SAVE_INTERVAL_SECS`]
    /// seconds, so at most one interval of changes can be lost on an
    /// unclean shutdown.
    pub fn start_persistence_task(&self) {
        let data = Arc::clone(&self.data);
        let loader = self.loader.clone();

        tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(SAVE_INTERVAL_SECS));

            loop {
                interval.tick().await;
                loader.persist(&*data.lock().await).await;
            }
        });
    }

    /// Writes the current data to disk immediately.
    pub async fn persist(&self) {
        self.loader.persist(&*self.data.lock().await).await;
    }

    /// Returns the response text of a text command, if it exists.
    pub async fn command_response(&self, name: &str) -> Option<String> {
        self.data.lock().await.commands.get(name).cloned()
    }

    /// Creates a new text command.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CommandExists`] if the name is already taken;
    /// the existing response is left untouched.
    pub async fn add_command(&self, name: &str, response: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;

        if data.commands.contains_key(name) {
            return Err(StoreError::CommandExists(name.to_owned()));
        }

        debug!("adding command {}", name);
        data.commands.insert(name.to_owned(), response.to_owned());
        Ok(())
    }

    /// Updates the response of an existing text command.
    ///
    /// Returns `true` if the command existed and was updated, `false` if
    /// there was nothing to update (no command is created in that case).
    pub async fn update_command(&self, name: &str, response: &str) -> bool {
        let mut data = self.data.lock().await;

        match data.commands.get_mut(name) {
            Some(existing) => {
                debug!("updating command {}", name);
                *existing = response.to_owned();
                true
            }
            None => false,
        }
    }

    /// Removes a text command.
    ///
    /// Removing a name that does not exist is a no-op. Aliases pointing at
    /// the removed command are left in place and dangle.
    pub async fn remove_command(&self, name: &str) {
        debug!("removing command {}", name);
        self.data.lock().await.commands.remove(name);
    }

    /// Returns the names of all text commands.
    pub async fn command_names(&self) -> Vec<String> {
        self.data.lock().await.commands.keys().cloned().collect()
    }

    /// Creates a new alias pointing at a text command.
    ///
    /// The target's existence is checked by the alias handler, not here;
    /// the store only guarantees that alias names stay unique.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`] if the alias name is already
    /// taken.
    pub async fn add_alias(&self, alias: &str, target: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;

        if data.aliases.contains_key(alias) {
            return Err(StoreError::AliasExists(alias.to_owned()));
        }

        debug!("aliasing {} to {}", alias, target);
        data.aliases.insert(alias.to_owned(), target.to_owned());
        Ok(())
    }

    /// Returns the target command name an alias points at, if the alias
    /// exists.
    pub async fn resolve_alias(&self, alias: &str) -> Option<String> {
        self.data.lock().await.aliases.get(alias).cloned()
    }

    /// Ensures a profile row exists for a chatter.
    ///
    /// Idempotent: if the user id is already known, nothing changes and the
    /// original first-seen timestamp is preserved.
    pub async fn upsert_user(&self, user_id: &str, user_name: &str) {
        self.data
            .lock()
            .await
            .users
            .entry(user_id.to_owned())
            .or_insert_with(|| UserProfile::new(user_name));
    }

    /// Returns the country stored on a chatter's profile.
    pub async fn user_country(&self, user_id: &str) -> Option<String> {
        self.data
            .lock()
            .await
            .users
            .get(user_id)
            .and_then(|profile| profile.country.clone())
    }

    /// Sets the country on a chatter's profile.
    ///
    /// A no-op when the profile does not exist; profiles are created by
    /// [`Store::upsert_user`] before any command runs.
    pub async fn set_user_country(&self, user_id: &str, country: &str) {
        if let Some(profile) = self.data.lock().await.users.get_mut(user_id) {
            profile.country = Some(country.to_owned());
        }
    }

    /// Returns the zodiac sign stored on a chatter's profile.
    pub async fn user_sign(&self, user_id: &str) -> Option<String> {
        self.data
            .lock()
            .await
            .users
            .get(user_id)
            .and_then(|profile| profile.zodiac_sign.clone())
    }

    /// Sets the zodiac sign on a chatter's profile.
    pub async fn set_user_sign(&self, user_id: &str, sign: &str) {
        if let Some(profile) = self.data.lock().await.users.get_mut(user_id) {
            profile.zodiac_sign = Some(sign.to_owned());
        }
    }
}
