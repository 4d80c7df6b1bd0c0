//! Following page summary: joins followed traders with their profiles.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::adapter::Jitter;
use crate::models::{FollowedTrader, PerformanceStatus, TraderProfile};

use super::{simulate_with, FollowConfig, SimulatedPnl};

/// A followed trader with the profile and config needed to simulate it.
#[derive(Debug, Clone, Serialize)]
pub struct FollowedEntry {
    pub address: String,
    pub trader: TraderProfile,
    pub config: FollowConfig,
    pub simulated: SimulatedPnl,
}

/// Totals for the following page header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FollowingOverview {
    pub total_followed: usize,
    /// Followed traders currently rated good
    pub active_followed: usize,
    pub total_invested: Decimal,
    pub total_pnl: Decimal,
    /// Whale trades in the current live feed
    pub today_activities: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowFilter {
    #[default]
    All,
    Active,
    Warning,
}

impl FollowFilter {
    pub fn keeps(&self, entry: &FollowedEntry) -> bool {
        let good = entry.trader.status() == PerformanceStatus::Good;
        match self {
            FollowFilter::All => true,
            FollowFilter::Active => good,
            FollowFilter::Warning => !good,
        }
    }
}

impl FromStr for FollowFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FollowFilter::All),
            "active" => Ok(FollowFilter::Active),
            "warning" => Ok(FollowFilter::Warning),
            other => Err(format!("unknown filter '{}' (all, active, warning)", other)),
        }
    }
}

impl fmt::Display for FollowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FollowFilter::All => "all",
            FollowFilter::Active => "active",
            FollowFilter::Warning => "warning",
        };
        write!(f, "{}", s)
    }
}

/// Pair each followed trader with its profile; unknown traders are dropped.
pub fn join_followed(
    followed: &[FollowedTrader],
    traders: &[TraderProfile],
    jitter: &mut Jitter,
) -> Vec<FollowedEntry> {
    followed
        .iter()
        .filter_map(|f| {
            let trader = traders.iter().find(|t| t.matches(&f.address))?;
            Some(FollowedEntry {
                address: f.address.clone(),
                trader: trader.clone(),
                config: f.config,
                simulated: simulate_with(jitter, Decimal::from(trader.roi), &f.config),
            })
        })
        .collect()
}

/// Summarize joined entries. `total_followed` is the store count, which may
/// exceed the number of entries when some traders had no profile.
pub fn summarize(
    entries: &[FollowedEntry],
    total_followed: usize,
    live_whale_trades: usize,
) -> FollowingOverview {
    let mut overview = FollowingOverview {
        total_followed,
        today_activities: live_whale_trades,
        ..Default::default()
    };

    for entry in entries {
        overview.total_invested += entry.simulated.invested;
        overview.total_pnl += entry.simulated.pnl;
        if entry.trader.status() == PerformanceStatus::Good {
            overview.active_followed += 1;
        }
    }

    overview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::trader_to_profile;
    use crate::api::{TraderLeaderboardEntry, TraderType};
    use rust_decimal_macros::dec;

    fn profile(address: &str, win_rate: f64) -> TraderProfile {
        let entry = TraderLeaderboardEntry {
            address: address.to_string(),
            trader_type: TraderType::Normal,
            win_rate,
            total_volume: 1_000.0,
            total_trades: 10,
        };
        trader_to_profile(&entry, None, &mut Jitter::seeded(5))
    }

    fn followed(address: &str) -> FollowedTrader {
        FollowedTrader::new(address, FollowConfig::default())
    }

    #[test]
    fn test_join_is_case_insensitive_and_drops_unknown() {
        let traders = vec![profile("0xAAA", 0.65), profile("0xbbb", 0.35)];
        let follows = vec![followed("0xaaa"), followed("0xccc")];

        let entries = join_followed(&follows, &traders, &mut Jitter::seeded(1));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].address, "0xaaa");
        assert_eq!(entries[0].trader.roi, 45);
    }

    #[test]
    fn test_overview_totals() {
        let traders = vec![profile("0xaaa", 0.65), profile("0xbbb", 0.35)];
        let follows = vec![followed("0xaaa"), followed("0xbbb"), followed("0xccc")];
        let entries = join_followed(&follows, &traders, &mut Jitter::seeded(1));

        let overview = summarize(&entries, follows.len(), 7);

        assert_eq!(overview.total_followed, 3);
        assert_eq!(overview.active_followed, 1);
        assert_eq!(overview.total_invested, dec!(3000));
        // 1500 * 45% + 1500 * -50%
        assert_eq!(overview.total_pnl, dec!(-75));
        assert_eq!(overview.today_activities, 7);
    }

    #[test]
    fn test_filters() {
        let traders = vec![profile("0xaaa", 0.65), profile("0xbbb", 0.45)];
        let follows = vec![followed("0xaaa"), followed("0xbbb")];
        let entries = join_followed(&follows, &traders, &mut Jitter::seeded(1));

        let count = |filter: FollowFilter| entries.iter().filter(|e| filter.keeps(e)).count();
        assert_eq!(count(FollowFilter::All), 2);
        assert_eq!(count(FollowFilter::Active), 1);
        assert_eq!(count(FollowFilter::Warning), 1);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("Active".parse::<FollowFilter>(), Ok(FollowFilter::Active));
        assert!("paused".parse::<FollowFilter>().is_err());
        assert_eq!(FollowFilter::Warning.to_string(), "warning");
    }
}
