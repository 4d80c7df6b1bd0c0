//! Follow configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lowest accepted copy ratio, in percent.
pub const MIN_COPY_RATIO: u32 = 10;
/// Highest accepted copy ratio, in percent.
pub const MAX_COPY_RATIO: u32 = 100;
pub const MIN_VIRTUAL_CAPITAL: u64 = 1_000;
pub const MAX_VIRTUAL_CAPITAL: u64 = 50_000;

/// Simulated copy-trading parameters for one followed trader.
///
/// `copy_ratio` and `virtual_capital` only take effect while `enabled` is
/// true; disabling keeps the stored values so re-enabling restores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowConfig {
    pub enabled: bool,

    /// Percentage of virtual capital allocated (10 to 100)
    #[serde(with = "rust_decimal::serde::float")]
    pub copy_ratio: Decimal,

    /// Maximum USD per copied trade
    #[serde(with = "rust_decimal::serde::float")]
    pub max_per_trade: Decimal,

    /// Notional bankroll for the simulation (1,000 to 50,000)
    #[serde(with = "rust_decimal::serde::float")]
    pub virtual_capital: Decimal,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            copy_ratio: dec!(30),
            max_per_trade: dec!(1000),
            virtual_capital: dec!(5000),
        }
    }
}

impl FollowConfig {
    /// Shallow-merge `patch` over this config.
    pub fn merged(self, patch: &FollowConfigPatch) -> Self {
        Self {
            enabled: patch.enabled.unwrap_or(self.enabled),
            copy_ratio: patch.copy_ratio.unwrap_or(self.copy_ratio),
            max_per_trade: patch.max_per_trade.unwrap_or(self.max_per_trade),
            virtual_capital: patch.virtual_capital.unwrap_or(self.virtual_capital),
        }
    }
}

/// Partial update for [`FollowConfig`]; unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowConfigPatch {
    pub enabled: Option<bool>,
    pub copy_ratio: Option<Decimal>,
    pub max_per_trade: Option<Decimal>,
    pub virtual_capital: Option<Decimal>,
}

impl FollowConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.copy_ratio.is_none()
            && self.max_per_trade.is_none()
            && self.virtual_capital.is_none()
    }
}
