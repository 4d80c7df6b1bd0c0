//! View-models for followed traders, trader profiles, markets, trades and alerts.

mod alert;
mod follow;
mod market;
mod trade;
mod trader;

pub use alert::{Alert, AlertKind, SentimentReading};
pub use follow::FollowedTrader;
pub use market::{Market, MarketCategory, MarketStatus, PricePoint};
pub use trade::{TradeSide, TradeView};
pub use trader::{
    short_address, Expertise, PerformanceStatus, RecentPerformance, TraderProfile,
};
