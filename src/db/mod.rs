//! Persistence for the follow list.
//!
//! Storage is a plain key-value interface with whole-value reads and writes;
//! [`FollowStore`] owns serialization and the fallback on unreadable data.

mod following;
#[cfg(test)]
mod memory;
mod sqlite;

use std::future::Future;

use anyhow::Result;

pub use following::FollowStore;
#[cfg(test)]
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Durable mapping from key to a serialized value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Replace the whole value stored under `key`.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}
