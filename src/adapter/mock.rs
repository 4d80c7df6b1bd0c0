//! Static datasets shown when the backend returns nothing.

use chrono::{Duration, Utc};

use crate::models::{
    short_address, Alert, AlertKind, Expertise, Market, MarketCategory, MarketStatus,
    PerformanceStatus, PricePoint, RecentPerformance, SentimentReading, TradeSide, TradeView,
    TraderProfile,
};

const MOCK_WALLETS: [&str; 3] = [
    "0x7a3f9c2e41b8d05f6e2a9c71d3b4e8f0a1c2d3e4",
    "0x1b2c3d4e5f60718293a4b5c6d7e8f9012a3b4c5d",
    "0x9f8e7d6c5b4a39281706f5e4d3c2b1a098765432",
];

pub fn mock_markets() -> Vec<Market> {
    let now = Utc::now();
    let rows = [
        (
            "us-election-winner",
            "Who will win the US presidential election?",
            MarketCategory::Politics,
            "US Politics",
            0.52,
            3.4,
        ),
        (
            "ceasefire-by-july",
            "Will a ceasefire be signed by July?",
            MarketCategory::Geopolitics,
            "Middle East",
            0.31,
            -6.2,
        ),
        (
            "fed-cut-june",
            "Will the Fed cut rates in June?",
            MarketCategory::Politics,
            "Macro Policy",
            0.68,
            1.1,
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, &(slug, title, category, subcategory, price, change))| Market {
            id: i as u32 + 1,
            slug: slug.to_string(),
            title: title.to_string(),
            category,
            subcategory: subcategory.to_string(),
            current_price: price,
            price_change_24h: change,
            volume_24h: 250_000.0 * (i as f64 + 1.0),
            liquidity: 75.0,
            status: MarketStatus::Active,
            end_date: now + Duration::days(30),
            yes_price: price,
            no_price: 1.0 - price,
            price_history_7d: (0..7i64)
                .map(|d| PricePoint {
                    timestamp: now - Duration::days(6 - d),
                    price: price - 0.01 * (6 - d) as f64 * change.signum(),
                })
                .collect(),
        })
        .collect()
}

pub fn mock_traders() -> Vec<TraderProfile> {
    let now = Utc::now();
    let rows: [(&[&str], i64, i64, u64, f64, PerformanceStatus); 3] = [
        (&["Whale", "Smart Money", "Oracle"], 72, 66, 184, 1_250_000.0, PerformanceStatus::Good),
        (&["Core"], 55, -10, 96, 80_000.0, PerformanceStatus::Warning),
        (&["Contrarian"], 34, -52, 143, 240_000.0, PerformanceStatus::Bad),
    ];

    rows.iter()
        .zip(MOCK_WALLETS)
        .enumerate()
        .map(|(i, (&(tags, win_rate, roi, trades, volume, status), address))| TraderProfile {
            address: address.to_string(),
            short_address: short_address(address),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            win_rate,
            win_rate_7d: win_rate + 2,
            win_rate_30d: win_rate - 1,
            roi,
            total_profit: (volume * roi as f64 / 100.0) as i64,
            total_trades: trades,
            total_volume: volume,
            expertise: vec![
                Expertise {
                    category: "International Politics".to_string(),
                    win_rate: win_rate + 3,
                    trades: trades * 6 / 10,
                },
                Expertise {
                    category: "Geopolitics".to_string(),
                    win_rate: win_rate - 4,
                    trades: trades * 4 / 10,
                },
            ],
            recent_performance: RecentPerformance {
                period: "7d".to_string(),
                status,
                message: status.message().to_string(),
            },
            ai_review: format!("Win rate {}% across {} trades.", win_rate, trades),
            last_active: now - Duration::hours(2 + i as i64 * 5),
            joined_at: now - Duration::days(120 + i as i64 * 90),
        })
        .collect()
}

pub fn mock_alerts() -> Vec<Alert> {
    let now = Utc::now();
    vec![
        Alert {
            id: "0x5e1f0a9b".to_string(),
            kind: AlertKind::WhaleTrade,
            icon: "🐋".to_string(),
            message: format!(
                "{} bought \"us-election-winner\" $84,000 @0.52",
                short_address(MOCK_WALLETS[0])
            ),
            timestamp: now - Duration::minutes(4),
            link: format!("/traders/{}", MOCK_WALLETS[0]),
        },
        Alert {
            id: "0x2c77d3e1".to_string(),
            kind: AlertKind::MarketSurge,
            icon: "📊".to_string(),
            message: "\"ceasefire-by-july\" volume up 240% in the last hour".to_string(),
            timestamp: now - Duration::minutes(18),
            link: "/markets/ceasefire-by-july".to_string(),
        },
        Alert {
            id: "0x91ab40f6".to_string(),
            kind: AlertKind::WhaleTrade,
            icon: "🐋".to_string(),
            message: format!(
                "{} sold \"fed-cut-june\" $31,500 @0.68",
                short_address(MOCK_WALLETS[2])
            ),
            timestamp: now - Duration::minutes(47),
            link: format!("/traders/{}", MOCK_WALLETS[2]),
        },
    ]
}

pub fn mock_trades() -> Vec<TradeView> {
    let now = Utc::now();
    let rows = [
        ("0x5e1f0a9b3c4d5e6f", MOCK_WALLETS[0], "Yes", TradeSide::Buy, 0.52, 161_538.0, 4),
        ("0x91ab40f6a7b8c9d0", MOCK_WALLETS[2], "Yes", TradeSide::Sell, 0.68, 46_323.0, 47),
        ("0x3d4e5f60718293a4", MOCK_WALLETS[1], "No", TradeSide::Buy, 0.69, 22_000.0, 95),
    ];

    rows.iter()
        .map(|&(hash, maker, outcome, side, price, size, minutes)| TradeView {
            tx_hash: hash.to_string(),
            maker: maker.to_string(),
            taker: maker.to_string(),
            outcome: outcome.to_string(),
            side,
            price,
            size,
            timestamp: now - Duration::minutes(minutes),
        })
        .collect()
}

pub fn mock_sentiment() -> Vec<SentimentReading> {
    [("US Politics", 58, 30), ("Geopolitics", 41, 44), ("Macro", 63, 22)]
        .iter()
        .map(|&(topic, bullish, bearish)| SentimentReading {
            topic: topic.to_string(),
            bullish,
            bearish,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasets_are_non_empty() {
        assert!(!mock_markets().is_empty());
        assert!(!mock_traders().is_empty());
        assert!(!mock_alerts().is_empty());
        assert!(!mock_trades().is_empty());
        assert!(!mock_sentiment().is_empty());
    }

    #[test]
    fn test_mock_traders_are_consistent() {
        for trader in mock_traders() {
            assert_eq!(trader.status(), PerformanceStatus::from_win_rate(trader.win_rate as f64));
            assert_eq!(trader.short_address, short_address(&trader.address));
        }
    }

    #[test]
    fn test_sentiment_splits_fit() {
        for reading in mock_sentiment() {
            assert!(reading.bullish + reading.bearish + reading.neutral() == 100);
        }
    }
}
