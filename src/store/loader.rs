//! Persistence layer for loading and saving the store file.
//!
//! The whole [`StoreData`] document is serialized to JSON and written to a
//! single file. Loading is fault-tolerant: a missing or corrupted file
//! yields an empty data set instead of an error, so the bot can always
//! start.

use log::{error, info, warn};
use tokio::fs;

use crate::store::records::StoreData;

/// Handles loading and persisting the store data to disk.
#[derive(Clone)]
pub struct StoreLoader {
    /// Path to the JSON file where the store data lives.
    path: String,
}

impl StoreLoader {
    /// Creates a new `StoreLoader` for the specified file path.
    pub fn new(path: String) -> Self {
        StoreLoader { path }
    }

    /// Loads the store data from disk.
    ///
    /// # Error Handling
    ///
    /// - If the file doesn't exist: logs a warning and returns empty data
    /// - If deserialization fails: logs an error and returns empty data
    ///
    /// The seed commands are applied on top by the store itself, so a fresh
    /// or corrupted file still ends up with a usable command set.
    pub async fn load(&self) -> StoreData {
        let Ok(serialized) = fs::read_to_string(&self.path).await else {
            warn!("no persisted store found, starting with an empty one");
            return StoreData::default();
        };

        let Ok(data) = serde_json::from_str(&serialized) else {
            error!("failed to deserialize the persisted store, starting with an empty one");
            return StoreData::default();
        };

        info!("loaded persisted store from {}", &self.path);

        data
    }

    /// Persists the store data to disk.
    ///
    /// Serialization or write failures are logged and swallowed; the bot
    /// keeps running on its in-memory state and retries at the next save.
    pub async fn persist(&self, data: &StoreData) {
        let serialized = match serde_json::to_string(data) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!("failed to serialize the store: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, &serialized).await {
            error!("failed to persist the store: {}", e);
            return;
        }

        info!("persisted store");
    }
}
