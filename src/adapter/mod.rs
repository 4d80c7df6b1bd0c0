//! API payload to view-model adapters.
//!
//! Every list adapter goes through [`or_fallback`]: an absent or empty payload
//! yields the static dataset from [`mock`] so a screen always has content.

mod alert;
mod market;
pub mod mock;
mod synthetic;
mod trader;

use serde::Serialize;
use tracing::debug;

use crate::api::{MarketData, TraderLeaderboardEntry, WhaleTrade};
use crate::models::{Alert, Market, SentimentReading, TradeView, TraderProfile};

pub use alert::{
    alerts_with_fallback, insider_alerts_with_fallback, trades_with_fallback,
    whale_trade_to_trade,
};
pub use market::{market_to_view, markets_with_fallback};
pub use synthetic::Jitter;
#[cfg(test)]
pub use trader::trader_to_profile;
pub use trader::{ai_traders_with_fallback, trader_detail_to_profile, traders_with_fallback};

/// Marker for a payload with nothing to adapt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

/// `Ok` with the items if the payload has any.
pub fn non_empty<T>(payload: Option<&[T]>) -> Result<&[T], Empty> {
    match payload {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(Empty),
    }
}

/// Adapt `payload` with `adapt`, or return `fallback()` if it is empty.
pub fn or_fallback<T, U>(
    payload: Option<&[T]>,
    fallback: fn() -> Vec<U>,
    adapt: impl FnOnce(&[T]) -> Vec<U>,
) -> Vec<U> {
    match non_empty(payload) {
        Ok(items) => adapt(items),
        Err(Empty) => {
            debug!("Empty payload, using fallback data");
            fallback()
        }
    }
}

/// Round half toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Whole-dollar amount with thousands separators, e.g. `$1,234,567`.
pub fn format_usd(amount: f64) -> String {
    let rounded = round_half_up(amount);
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Sign follows the symbol: `$-25,000`.
    if rounded < 0 {
        format!("$-{}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Everything the dashboard renders in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub markets: Vec<Market>,
    pub traders: Vec<TraderProfile>,
    pub alerts: Vec<Alert>,
    pub trades: Vec<TradeView>,
    pub sentiment: Vec<SentimentReading>,
}

pub fn combine_dashboard_data(
    markets: Option<&[MarketData]>,
    traders: Option<&[TraderLeaderboardEntry]>,
    whales: Option<&[WhaleTrade]>,
    jitter: &mut Jitter,
) -> DashboardData {
    DashboardData {
        markets: markets_with_fallback(markets, jitter),
        traders: traders_with_fallback(traders, jitter),
        alerts: alerts_with_fallback(whales),
        trades: trades_with_fallback(whales),
        sentiment: mock::mock_sentiment(),
    }
}
