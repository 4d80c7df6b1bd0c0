//! Persistent list of followed traders.
//!
//! The whole list lives under one key and is rewritten on every mutation.
//! Storage failures never reach the caller: a bad read starts the session
//! empty, a failed write leaves the in-memory list as the source of truth.

use tracing::{debug, info, warn};

use crate::models::FollowedTrader;
use crate::trading::{FollowConfig, FollowConfigPatch};

use super::KeyValueStore;

/// Key holding the serialized follow list.
pub const STORAGE_KEY: &str = "insider-hunter-following";

pub struct FollowStore<S> {
    storage: S,
    traders: Vec<FollowedTrader>,
    loaded: bool,
}

impl<S: KeyValueStore> FollowStore<S> {
    /// Empty store that has not read from storage yet.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            traders: Vec::new(),
            loaded: false,
        }
    }

    /// Create and read the persisted list.
    pub async fn load(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.reload().await;
        store
    }

    /// Replace in-memory state with what storage holds.
    pub async fn reload(&mut self) {
        self.traders = match self.storage.get(STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<FollowedTrader>>(&raw) {
                Ok(traders) => traders,
                Err(e) => {
                    warn!(error = %e, "Failed to parse following data, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load following data, starting empty");
                Vec::new()
            }
        };
        self.loaded = true;

        debug!(count = self.traders.len(), "Loaded following list");
    }

    /// False until the first load finished, even if it found nothing.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    async fn persist(&self) {
        let raw = match serde_json::to_string(&self.traders) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize following data");
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &raw).await {
            warn!(error = %e, "Failed to save following data");
        }
    }

    /// Follow `address` with the default config plus `overrides`.
    ///
    /// Returns false and changes nothing if the address is already followed.
    pub async fn follow(&mut self, address: &str, overrides: Option<&FollowConfigPatch>) -> bool {
        if self.is_following(address) {
            debug!(address = %address, "Already following");
            return false;
        }

        let config = match overrides {
            Some(patch) => FollowConfig::default().merged(patch),
            None => FollowConfig::default(),
        };
        let trader = FollowedTrader::new(address, config);
        info!(address = %trader.address, "Following trader");

        self.traders.push(trader);
        self.persist().await;
        true
    }

    /// Stop following `address`. Returns whether anything was removed.
    pub async fn unfollow(&mut self, address: &str) -> bool {
        let before = self.traders.len();
        self.traders.retain(|t| !t.matches(address));
        let removed = self.traders.len() != before;

        if removed {
            info!(address = %address, "Unfollowed trader");
        }
        self.persist().await;
        removed
    }

    /// Merge `patch` into the config of `address`. Returns whether it matched.
    pub async fn update_config(&mut self, address: &str, patch: &FollowConfigPatch) -> bool {
        let mut found = false;
        for trader in self.traders.iter_mut().filter(|t| t.matches(address)) {
            trader.config = trader.config.merged(patch);
            found = true;
        }

        if found {
            info!(address = %address, "Updated follow config");
        }
        self.persist().await;
        found
    }

    pub fn is_following(&self, address: &str) -> bool {
        self.traders.iter().any(|t| t.matches(address))
    }

    pub fn get_config(&self, address: &str) -> Option<FollowConfig> {
        self.traders
            .iter()
            .find(|t| t.matches(address))
            .map(|t| t.config)
    }

    pub fn followed_traders(&self) -> &[FollowedTrader] {
        &self.traders
    }

    pub fn followed_addresses(&self) -> Vec<String> {
        self.traders.iter().map(|t| t.address.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.traders.len()
    }
}
