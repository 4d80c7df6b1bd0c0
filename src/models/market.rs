//! Market view-model for the market list.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Market lifecycle as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Active,
    Resolved,
    Closed,
}

impl MarketStatus {
    /// Active wins over resolved; anything else is closed.
    pub fn from_flags(active: bool, resolved: bool) -> Self {
        if active {
            MarketStatus::Active
        } else if resolved {
            MarketStatus::Resolved
        } else {
            MarketStatus::Closed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Active => "active",
            MarketStatus::Resolved => "resolved",
            MarketStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCategory {
    Politics,
    Geopolitics,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Prediction market view-model.
#[derive(Debug, Clone, Serialize)]
pub struct Market {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub category: MarketCategory,
    pub subcategory: String,

    /// Price of the Yes outcome (0.0 to 1.0)
    pub current_price: f64,
    /// Percent change over 24h
    pub price_change_24h: f64,
    pub volume_24h: f64,
    pub liquidity: f64,
    pub status: MarketStatus,
    pub end_date: DateTime<Utc>,
    pub yes_price: f64,
    pub no_price: f64,
    pub price_history_7d: Vec<PricePoint>,
}

impl Market {
    pub fn is_active(&self) -> bool {
        self.status == MarketStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_flags() {
        assert_eq!(MarketStatus::from_flags(true, true), MarketStatus::Active);
        assert_eq!(MarketStatus::from_flags(false, true), MarketStatus::Resolved);
        assert_eq!(MarketStatus::from_flags(false, false), MarketStatus::Closed);
    }
}
