//! Insight backend client for whale trades, markets, traders and alerts.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::types::*;

/// Client for the insight REST API (read-only operations).
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against `base_url` with a per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with optional query params and decode the JSON body.
    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>, what: &str) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Fetching {}", what);

        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(q);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", what))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} request failed: {} - {}", what, status, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", what))
    }

    /// Fetch the live whale trade feed.
    pub async fn get_whales_live(&self, params: &WhalesQueryParams) -> Result<WhaleTradesResponse> {
        self.get_json("/api/whales/live", Some(params), "whale trades").await
    }

    /// Fetch markets.
    pub async fn get_markets(&self, params: &MarketsQueryParams) -> Result<MarketsResponse> {
        self.get_json("/api/markets", Some(params), "markets").await
    }

    /// Fetch a single market by slug.
    pub async fn get_market_detail(&self, slug: &str) -> Result<MarketDetailResponse> {
        let path = format!("/api/markets/{}", slug);
        self.get_json::<_, ()>(&path, None, "market detail").await
    }

    /// Fetch the trader leaderboard.
    pub async fn get_traders_leaderboard(
        &self,
        params: &LeaderboardQueryParams,
    ) -> Result<TraderLeaderboardResponse> {
        self.get_json("/api/traders/leaderboard", Some(params), "trader leaderboard")
            .await
    }

    /// Fetch a single trader by address.
    pub async fn get_trader_detail(&self, address: &str) -> Result<TraderDetailResponse> {
        let path = format!("/api/traders/{}", address);
        self.get_json::<_, ()>(&path, None, "trader detail").await
    }

    /// Fetch the AI-scored trader leaderboard.
    pub async fn get_ai_leaderboard(
        &self,
        params: &LeaderboardQueryParams,
    ) -> Result<AiLeaderboardResponse> {
        self.get_json("/api/ai/leaderboard", Some(params), "AI leaderboard")
            .await
    }

    /// Fetch insider alerts.
    pub async fn get_insider_alerts(
        &self,
        params: &InsiderAlertsQueryParams,
    ) -> Result<InsiderAlertsResponse> {
        self.get_json("/api/insider/alerts", Some(params), "insider alerts")
            .await
    }

    /// Probe backend health.
    pub async fn health_check(&self) -> Result<HealthResponse> {
        self.get_json::<_, ()>("/health", None, "health").await
    }
}
