//! Market DTOs to [`Market`] view-models.

use chrono::{Duration, Utc};

use crate::api::MarketData;
use crate::models::{Market, MarketCategory, MarketStatus, PricePoint};

use super::{mock, or_fallback, Jitter};

const DEFAULT_SUBCATEGORY: &str = "International Politics";
const DEFAULT_MARKET_DAYS: i64 = 30;

/// Yes price assigned to the market at `index` in the list.
pub fn base_price(index: usize) -> f64 {
    0.45 + (index as f64 * 0.05) % 0.5
}

/// Map a market DTO; price, volume and liquidity are synthesized.
pub fn market_to_view(market: &MarketData, index: usize, jitter: &mut Jitter) -> Market {
    let price = base_price(index);
    let now = Utc::now();

    let category = match market.category.as_deref() {
        Some(c) if c.contains("politic") => MarketCategory::Politics,
        _ => MarketCategory::Geopolitics,
    };
    let subcategory = market
        .category
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_SUBCATEGORY.to_string());

    let price_history_7d = (0..7i64)
        .map(|i| PricePoint {
            timestamp: now - Duration::days(6 - i),
            price: jitter.around(price, 0.1),
        })
        .collect();

    Market {
        id: index as u32 + 1,
        slug: market.slug.clone(),
        title: market.question.clone(),
        category,
        subcategory,
        current_price: price,
        price_change_24h: jitter.around(0.0, 20.0),
        volume_24h: jitter.between(100_000.0, 1_000_000.0),
        liquidity: jitter.between(50.0, 50.0),
        status: MarketStatus::from_flags(market.active, market.resolved),
        end_date: now + Duration::days(DEFAULT_MARKET_DAYS),
        yes_price: price,
        no_price: 1.0 - price,
        price_history_7d,
    }
}

pub fn markets_with_fallback(data: Option<&[MarketData]>, jitter: &mut Jitter) -> Vec<Market> {
    or_fallback(data, mock::mock_markets, |markets| {
        markets
            .iter()
            .enumerate()
            .map(|(i, m)| market_to_view(m, i, jitter))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(category: Option<&str>, active: bool, resolved: bool) -> MarketData {
        MarketData {
            slug: "will-x-happen".to_string(),
            question: "Will X happen?".to_string(),
            category: category.map(str::to_string),
            active,
            resolved,
        }
    }

    #[test]
    fn test_base_price_by_index() {
        assert!((base_price(0) - 0.45).abs() < 1e-9);
        assert!((base_price(2) - 0.55).abs() < 1e-9);
        assert!((base_price(10) - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_mapping() {
        let data = market(Some("us-politics"), true, false);
        let view = market_to_view(&data, 1, &mut Jitter::seeded(4));

        assert_eq!(view.id, 2);
        assert_eq!(view.title, "Will X happen?");
        assert_eq!(view.category, MarketCategory::Politics);
        assert_eq!(view.subcategory, "us-politics");
        assert_eq!(view.status, MarketStatus::Active);
        assert!((view.yes_price + view.no_price - 1.0).abs() < 1e-9);
        assert_eq!(view.price_history_7d.len(), 7);
        assert!(view.price_history_7d[0].timestamp < view.price_history_7d[6].timestamp);
        assert!((100_000.0..1_100_000.0).contains(&view.volume_24h));
        assert!((50.0..100.0).contains(&view.liquidity));
        assert!(view.end_date > Utc::now());
    }

    #[test]
    fn test_missing_category_defaults() {
        let view = market_to_view(&market(None, false, true), 0, &mut Jitter::seeded(4));
        assert_eq!(view.category, MarketCategory::Geopolitics);
        assert_eq!(view.subcategory, DEFAULT_SUBCATEGORY);
        assert_eq!(view.status, MarketStatus::Resolved);
    }

    #[test]
    fn test_fallback() {
        let mut jitter = Jitter::seeded(4);
        assert!(!markets_with_fallback(None, &mut jitter).is_empty());

        let live = [market(None, false, false), market(None, true, false)];
        let views = markets_with_fallback(Some(&live), &mut jitter);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].status, MarketStatus::Closed);
    }
}
