//! Trader profile as shown on leaderboards and the following page.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Coarse recent-performance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceStatus {
    Good,
    Warning,
    Bad,
}

impl PerformanceStatus {
    /// Classify a 0-100 win rate.
    pub fn from_win_rate(win_rate: f64) -> Self {
        if win_rate >= 60.0 {
            PerformanceStatus::Good
        } else if win_rate >= 40.0 {
            PerformanceStatus::Warning
        } else {
            PerformanceStatus::Bad
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PerformanceStatus::Good => "Strong recent performance",
            PerformanceStatus::Warning => "Holding steady",
            PerformanceStatus::Bad => "On a losing streak",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceStatus::Good => "good",
            PerformanceStatus::Warning => "warning",
            PerformanceStatus::Bad => "bad",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentPerformance {
    pub period: String,
    pub status: PerformanceStatus,
    pub message: String,
}

/// Win rate within one market category.
#[derive(Debug, Clone, Serialize)]
pub struct Expertise {
    pub category: String,
    pub win_rate: i64,
    pub trades: u64,
}

/// Trader view-model.
#[derive(Debug, Clone, Serialize)]
pub struct TraderProfile {
    pub address: String,
    pub short_address: String,
    pub tags: Vec<String>,

    /// Win rate, 0 to 100
    pub win_rate: i64,
    pub win_rate_7d: i64,
    pub win_rate_30d: i64,

    /// Estimated return, percent
    pub roi: i64,
    pub total_profit: i64,
    pub total_trades: u64,
    pub total_volume: f64,

    pub expertise: Vec<Expertise>,
    pub recent_performance: RecentPerformance,
    pub ai_review: String,
    pub last_active: DateTime<Utc>,
    pub joined_at: DateTime<Utc>,
}

impl TraderProfile {
    pub fn status(&self) -> PerformanceStatus {
        self.recent_performance.status
    }

    pub fn matches(&self, address: &str) -> bool {
        self.address.to_lowercase() == address.to_lowercase()
    }
}

/// Shorten a wallet address to `0x1234...abcd`.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() > 10 {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        address.to_string()
    }
}
