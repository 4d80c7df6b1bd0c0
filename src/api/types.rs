//! API response and query types for the insight backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paged list envelope shared by every collection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

pub type WhaleTradesResponse = ListResponse<WhaleTrade>;
pub type MarketsResponse = ListResponse<MarketData>;
pub type TraderLeaderboardResponse = ListResponse<TraderLeaderboardEntry>;
pub type AiLeaderboardResponse = ListResponse<AiTraderProfile>;
pub type InsiderAlertsResponse = ListResponse<InsiderAlert>;

/// Trader classification assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TraderType {
    SmartMoney,
    DumbMoney,
    #[default]
    Normal,
    #[serde(other)]
    Unknown,
}

impl std::str::FromStr for TraderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "smart_money" => Ok(TraderType::SmartMoney),
            "dumb_money" => Ok(TraderType::DumbMoney),
            "normal" => Ok(TraderType::Normal),
            other => Err(format!(
                "unknown trader type '{}' (smart_money, dumb_money, normal)",
                other
            )),
        }
    }
}

/// Large trade from /api/whales/live.
#[derive(Debug, Clone, Deserialize)]
pub struct WhaleTrade {
    pub tx_hash: String,
    pub maker: String,
    pub side: String,
    #[serde(default)]
    pub market_slug: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub amount_usd: f64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Market entry from /api/markets.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    pub slug: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub resolved: bool,
}

/// Market detail from /api/markets/{slug}.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDetailResponse {
    #[serde(flatten)]
    pub market: MarketData,
    #[serde(default)]
    pub recent_trades: Vec<WhaleTrade>,
}

/// Leaderboard row from /api/traders/leaderboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraderLeaderboardEntry {
    pub address: String,
    #[serde(default)]
    pub trader_type: TraderType,
    /// Fraction in [0, 1]
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub total_trades: u64,
}

/// Trader detail from /api/traders/{address}.
#[derive(Debug, Clone, Deserialize)]
pub struct TraderDetailResponse {
    #[serde(flatten)]
    pub trader: TraderLeaderboardEntry,
    #[serde(default)]
    pub ai_profile: Option<AiTraderProfile>,
    #[serde(default)]
    pub recent_trades: Vec<WhaleTrade>,
}

/// AI-scored trader from /api/ai/leaderboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiTraderProfile {
    #[serde(flatten)]
    pub trader: TraderLeaderboardEntry,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub ai_analysis: Option<String>,
}

/// Trade flagged for suspicious timing relative to news.
#[derive(Debug, Clone, Deserialize)]
pub struct InsiderAlert {
    pub id: i64,
    pub maker: String,
    #[serde(default)]
    pub market_slug: String,
    #[serde(default)]
    pub amount_usd: f64,
    #[serde(default)]
    pub time_diff_minutes: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub is_suspect: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Response from /health.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// Query parameters for various endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WhalesQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketsQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LeaderboardQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_trades: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_type: Option<TraderType>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InsiderAlertsQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspect_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_defaults_missing_fields() {
        let body = r#"{"data":[{"address":"0xabc"}]}"#;
        let resp: TraderLeaderboardResponse = serde_json::from_str(body).unwrap();

        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].trader_type, TraderType::Normal);
        assert_eq!(resp.data[0].total_trades, 0);
        assert!(resp.total.is_none());
    }

    #[test]
    fn test_trader_type_from_cli() {
        assert_eq!("smart-money".parse::<TraderType>(), Ok(TraderType::SmartMoney));
        assert_eq!("NORMAL".parse::<TraderType>(), Ok(TraderType::Normal));
        assert!("whale".parse::<TraderType>().is_err());
    }

    #[test]
    fn test_unknown_trader_type() {
        let entry: TraderLeaderboardEntry =
            serde_json::from_str(r#"{"address":"0x1","trader_type":"insider"}"#).unwrap();
        assert_eq!(entry.trader_type, TraderType::Unknown);
    }

    #[test]
    fn test_ai_profile_flattens_trader() {
        let body = r#"{
            "address": "0xdef",
            "trader_type": "smart_money",
            "win_rate": 0.7,
            "total_volume": 250000,
            "total_trades": 40,
            "label": "Election Sniper"
        }"#;
        let profile: AiTraderProfile = serde_json::from_str(body).unwrap();

        assert_eq!(profile.trader.address, "0xdef");
        assert_eq!(profile.trader.trader_type, TraderType::SmartMoney);
        assert_eq!(profile.label.as_deref(), Some("Election Sniper"));
        assert!(profile.ai_analysis.is_none());
    }

    #[test]
    fn test_params_skip_unset() {
        let params = WhalesQueryParams {
            limit: Some(20),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"limit":20}"#);
    }
}
