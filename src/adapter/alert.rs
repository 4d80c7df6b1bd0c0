//! Whale trade and insider alert DTOs to feed items.

use crate::api::{InsiderAlert, WhaleTrade};
use crate::models::{short_address, Alert, AlertKind, TradeSide, TradeView};

use super::{format_usd, mock, or_fallback};

/// Alerts shown from the whale feed.
pub const MAX_WHALE_ALERTS: usize = 10;

const ALERT_ID_LEN: usize = 10;

pub fn whale_trade_to_alert(trade: &WhaleTrade) -> Alert {
    let side = TradeSide::from_api(&trade.side);

    Alert {
        id: trade.tx_hash.chars().take(ALERT_ID_LEN).collect(),
        kind: AlertKind::WhaleTrade,
        icon: "🐋".to_string(),
        message: format!(
            "{} {} \"{}\" {} @{:.2}",
            short_address(&trade.maker),
            side.verb(),
            trade.market_slug,
            format_usd(trade.amount_usd),
            trade.price
        ),
        timestamp: trade.timestamp,
        link: format!("/traders/{}", trade.maker),
    }
}

/// The first [`MAX_WHALE_ALERTS`] whale trades as alerts.
pub fn alerts_with_fallback(whales: Option<&[WhaleTrade]>) -> Vec<Alert> {
    or_fallback(whales, mock::mock_alerts, |trades| {
        trades
            .iter()
            .take(MAX_WHALE_ALERTS)
            .map(whale_trade_to_alert)
            .collect()
    })
}

pub fn insider_alert_to_alert(alert: &InsiderAlert) -> Alert {
    let (kind, icon) = if alert.is_suspect {
        (AlertKind::WhaleTrade, "🚨")
    } else {
        (AlertKind::MarketSurge, "📊")
    };

    Alert {
        id: alert.id.to_string(),
        kind,
        icon: icon.to_string(),
        message: format!(
            "{} traded {} minutes before related news {} - {}",
            short_address(&alert.maker),
            alert.time_diff_minutes,
            format_usd(alert.amount_usd),
            alert.reason
        ),
        timestamp: alert.created_at,
        link: format!("/markets/{}", alert.market_slug),
    }
}

pub fn insider_alerts_with_fallback(alerts: Option<&[InsiderAlert]>) -> Vec<Alert> {
    or_fallback(alerts, mock::mock_alerts, |alerts| {
        alerts.iter().map(insider_alert_to_alert).collect()
    })
}

pub fn whale_trade_to_trade(trade: &WhaleTrade) -> TradeView {
    TradeView {
        tx_hash: trade.tx_hash.clone(),
        maker: trade.maker.clone(),
        taker: trade.maker.clone(),
        outcome: trade.outcome.clone(),
        side: TradeSide::from_api(&trade.side),
        price: trade.price,
        size: trade.size,
        timestamp: trade.timestamp,
    }
}

pub fn trades_with_fallback(whales: Option<&[WhaleTrade]>) -> Vec<TradeView> {
    or_fallback(whales, mock::mock_trades, |trades| {
        trades.iter().map(whale_trade_to_trade).collect()
    })
}
