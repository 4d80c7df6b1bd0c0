//! Query sources bound to the insight API endpoints.

use std::time::Duration;

use crate::api::*;

use super::{fetcher, Fetcher, QueryKey, QuerySource};

/// Refresh interval for the live whale feed.
pub const WHALE_POLL_INTERVAL: Duration = Duration::from_secs(10);

pub fn whales_live(api: &ApiClient, params: WhalesQueryParams) -> QuerySource<WhaleTradesResponse> {
    let key = QueryKey::new(&("whales", &params));
    let api = api.clone();
    let f = fetcher(move || {
        let api = api.clone();
        let params = params.clone();
        async move { api.get_whales_live(&params).await }
    });
    QuerySource::new(f, key)
}

pub fn markets(api: &ApiClient, params: MarketsQueryParams) -> QuerySource<MarketsResponse> {
    let key = QueryKey::new(&("markets", &params));
    let api = api.clone();
    let f = fetcher(move || {
        let api = api.clone();
        let params = params.clone();
        async move { api.get_markets(&params).await }
    });
    QuerySource::new(f, key)
}

pub fn market_detail(api: &ApiClient, slug: &str) -> QuerySource<MarketDetailResponse> {
    let key = QueryKey::new(&("market", slug));
    let api = api.clone();
    let slug = slug.to_string();
    let f = fetcher(move || {
        let api = api.clone();
        let slug = slug.clone();
        async move { api.get_market_detail(&slug).await }
    });
    QuerySource::new(f, key)
}

pub fn traders_leaderboard(
    api: &ApiClient,
    params: LeaderboardQueryParams,
) -> QuerySource<TraderLeaderboardResponse> {
    let key = QueryKey::new(&("leaderboard", &params));
    let api = api.clone();
    let f = fetcher(move || {
        let api = api.clone();
        let params = params.clone();
        async move { api.get_traders_leaderboard(&params).await }
    });
    QuerySource::new(f, key)
}

pub fn trader_detail(api: &ApiClient, address: &str) -> QuerySource<TraderDetailResponse> {
    let key = QueryKey::new(&("trader", address));
    let api = api.clone();
    let address = address.to_string();
    let f = fetcher(move || {
        let api = api.clone();
        let address = address.clone();
        async move { api.get_trader_detail(&address).await }
    });
    QuerySource::new(f, key)
}

pub fn ai_leaderboard(
    api: &ApiClient,
    params: LeaderboardQueryParams,
) -> QuerySource<AiLeaderboardResponse> {
    // The AI board only varies by limit and trader type.
    let key = QueryKey::new(&("ai-leaderboard", params.limit, params.trader_type));
    let api = api.clone();
    let f = fetcher(move || {
        let api = api.clone();
        let params = params.clone();
        async move { api.get_ai_leaderboard(&params).await }
    });
    QuerySource::new(f, key)
}

pub fn insider_alerts(
    api: &ApiClient,
    params: InsiderAlertsQueryParams,
) -> QuerySource<InsiderAlertsResponse> {
    let key = QueryKey::new(&("insider", &params));
    let api = api.clone();
    let f = fetcher(move || {
        let api = api.clone();
        let params = params.clone();
        async move { api.get_insider_alerts(&params).await }
    });
    QuerySource::new(f, key)
}

/// Probe that succeeds when /health answers.
pub fn health_probe(api: &ApiClient) -> Fetcher<()> {
    let api = api.clone();
    fetcher(move || {
        let api = api.clone();
        async move { api.health_check().await.map(|_| ()) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_api() -> ApiClient {
        ApiClient::with_timeout("http://localhost:8000", Duration::from_secs(30)).unwrap()
    }

    #[test]
    fn test_keys_follow_params() {
        let api = local_api();

        let a = whales_live(&api, WhalesQueryParams { limit: Some(20), ..Default::default() });
        let b = whales_live(&api, WhalesQueryParams { limit: Some(20), ..Default::default() });
        let c = whales_live(&api, WhalesQueryParams { limit: Some(50), ..Default::default() });

        assert_eq!(a.key, b.key);
        assert_ne!(a.key, c.key);
    }

    #[test]
    fn test_ai_key_ignores_min_trades() {
        let api = local_api();
        let params = LeaderboardQueryParams {
            limit: Some(10),
            min_trades: Some(3),
            trader_type: None,
        };
        let a = ai_leaderboard(&api, params.clone());
        let b = ai_leaderboard(&api, LeaderboardQueryParams { min_trades: Some(9), ..params });

        assert_eq!(a.key, b.key);
    }

    #[test]
    fn test_endpoints_have_distinct_keys() {
        let api = local_api();
        let market = market_detail(&api, "x");
        let trader = trader_detail(&api, "x");
        assert_ne!(market.key, trader.key);
    }
}
