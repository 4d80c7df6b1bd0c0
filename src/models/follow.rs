//! Followed trader record, as persisted by the follow store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::trading::FollowConfig;

/// A trader the user follows in simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedTrader {
    /// Wallet address, always lowercase
    pub address: String,

    /// When the follow was created
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub followed_at: DateTime<Utc>,

    pub config: FollowConfig,
}

impl FollowedTrader {
    pub fn new(address: &str, config: FollowConfig) -> Self {
        Self {
            address: address.to_lowercase(),
            followed_at: Utc::now(),
            config,
        }
    }

    /// Case-insensitive address match, folded the same way as on insert.
    pub fn matches(&self, address: &str) -> bool {
        self.address.to_lowercase() == address.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_is_lowercased() {
        let trader = FollowedTrader::new("0xAbCdEf", FollowConfig::default());
        assert_eq!(trader.address, "0xabcdef");
        assert!(trader.matches("0XABCDEF"));
        assert!(!trader.matches("0xabcde0"));
    }

    #[test]
    fn test_serialized_shape() {
        let trader = FollowedTrader::new("0x1", FollowConfig::default());
        let json = serde_json::to_value(&trader).unwrap();

        assert_eq!(json["address"], "0x1");
        assert!(json["followedAt"].is_i64());
        assert_eq!(json["config"]["enabled"], true);
    }
}
