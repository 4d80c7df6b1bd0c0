//! Alert feed and sentiment panel view-models.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    WhaleTrade,
    MarketSurge,
}

/// One line in the alert feed.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub icon: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// In-app route the alert points at
    pub link: String,
}

/// Bull/bear split for one topic.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReading {
    pub topic: String,
    pub bullish: u32,
    pub bearish: u32,
}

impl SentimentReading {
    pub fn neutral(&self) -> u32 {
        100u32.saturating_sub(self.bullish + self.bearish)
    }
}
