//! Hypothetical copy-trading P&L for a followed trader.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::adapter::Jitter;

use super::FollowConfig;

/// Result of simulating a follow; recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulatedPnl {
    /// Capital notionally committed to the trader
    pub invested: Decimal,
    /// Profit or loss at the trader's ROI
    pub pnl: Decimal,
    /// Simulated number of copied trades (cosmetic)
    pub trades: u32,
}

/// Simulate following a trader with `trader_roi` percent return.
///
/// Does not look at `config.enabled`; callers decide whether to show it.
pub fn calculate_simulated_pnl(trader_roi: Decimal, config: &FollowConfig) -> SimulatedPnl {
    simulate_with(&mut Jitter::from_entropy(), trader_roi, config)
}

pub fn simulate_with(
    jitter: &mut Jitter,
    trader_roi: Decimal,
    config: &FollowConfig,
) -> SimulatedPnl {
    let invested = config.virtual_capital * (config.copy_ratio / dec!(100));
    let pnl = invested * (trader_roi / dec!(100));

    SimulatedPnl {
        invested,
        pnl,
        trades: jitter.trade_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trading::FollowConfigPatch;

    #[test]
    fn test_default_config_positive_roi() {
        let result = calculate_simulated_pnl(dec!(20), &FollowConfig::default());

        assert_eq!(result.invested, dec!(1500));
        assert_eq!(result.pnl, dec!(300));
        assert!((5..20).contains(&result.trades));
    }

    #[test]
    fn test_negative_roi_loses() {
        let config = FollowConfig::default().merged(&FollowConfigPatch {
            copy_ratio: Some(dec!(50)),
            virtual_capital: Some(dec!(10000)),
            ..Default::default()
        });
        let result = calculate_simulated_pnl(dec!(-50), &config);

        assert_eq!(result.invested, dec!(5000));
        assert_eq!(result.pnl, dec!(-2500));
    }

    #[test]
    fn test_invested_is_exact() {
        let config = FollowConfig {
            copy_ratio: dec!(33),
            virtual_capital: dec!(1234),
            ..Default::default()
        };
        let result = calculate_simulated_pnl(dec!(7), &config);

        assert_eq!(result.invested, dec!(407.22));
        assert_eq!(result.pnl, dec!(28.5054));
    }

    #[test]
    fn test_disabled_config_still_computes() {
        let config = FollowConfig {
            enabled: false,
            ..Default::default()
        };
        let result = calculate_simulated_pnl(dec!(10), &config);
        assert_eq!(result.invested, dec!(1500));
    }

    #[test]
    fn test_seeded_trade_count() {
        let a = simulate_with(&mut Jitter::seeded(3), dec!(10), &FollowConfig::default());
        let b = simulate_with(&mut Jitter::seeded(3), dec!(10), &FollowConfig::default());
        assert_eq!(a, b);
    }
}
