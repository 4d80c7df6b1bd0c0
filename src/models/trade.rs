//! Trade feed view-model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Anything other than `BUY` (case-insensitive) reads as a sell.
    pub fn from_api(side: &str) -> Self {
        if side.eq_ignore_ascii_case("BUY") {
            TradeSide::Buy
        } else {
            TradeSide::Sell
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            TradeSide::Buy => "bought",
            TradeSide::Sell => "sold",
        }
    }
}

/// Individual trade for the live feed.
#[derive(Debug, Clone, Serialize)]
pub struct TradeView {
    pub tx_hash: String,
    pub maker: String,

    /// The feed does not report takers; this mirrors `maker`
    pub taker: String,

    pub outcome: String,
    pub side: TradeSide,
    pub price: f64,
    pub size: f64,
    pub timestamp: DateTime<Utc>,
}

impl TradeView {
    /// Notional value in USD.
    pub fn notional(&self) -> f64 {
        self.price * self.size
    }
}
