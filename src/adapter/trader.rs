//! Leaderboard and detail DTOs to [`TraderProfile`].

use chrono::Utc;
use tracing::debug;

use crate::api::{AiTraderProfile, TraderDetailResponse, TraderLeaderboardEntry, TraderType};
use crate::models::{short_address, Expertise, PerformanceStatus, RecentPerformance, TraderProfile};

use super::{mock, or_fallback, round_half_up, Jitter};

/// Volume above which a trader is tagged as a whale.
pub const WHALE_VOLUME_THRESHOLD: f64 = 100_000.0;

pub const WHALE_TAG: &str = "Whale";

fn tags_for(trader_type: TraderType) -> &'static [&'static str] {
    match trader_type {
        TraderType::SmartMoney => &["Smart Money", "Oracle"],
        TraderType::DumbMoney => &["Contrarian"],
        TraderType::Normal | TraderType::Unknown => &["Core"],
    }
}

/// Estimated ROI (percent) from a 0-100 win rate.
///
/// The backend does not report returns, so this is a fixed piecewise
/// estimate: above 60% each point counts triple, below it each point short of
/// 60 costs double.
pub fn estimate_roi(win_rate: f64) -> f64 {
    if win_rate > 60.0 {
        (win_rate - 50.0) * 3.0
    } else {
        -(60.0 - win_rate) * 2.0
    }
}

fn default_review(win_rate: i64, trader_type: TraderType) -> String {
    let verdict = match trader_type {
        TraderType::SmartMoney => "smart money profile, a good candidate to copy",
        TraderType::DumbMoney => "contrarian indicator, consider taking the other side",
        TraderType::Normal | TraderType::Unknown => "steady performer",
    };
    format!("Win rate {}%: {}.", win_rate, verdict)
}

/// Map a leaderboard row to a profile.
///
/// `ai_analysis` replaces the generated review when present.
pub fn trader_to_profile(
    entry: &TraderLeaderboardEntry,
    ai_analysis: Option<&str>,
    jitter: &mut Jitter,
) -> TraderProfile {
    let mut tags: Vec<String> = tags_for(entry.trader_type)
        .iter()
        .map(|t| t.to_string())
        .collect();
    if entry.total_volume > WHALE_VOLUME_THRESHOLD {
        tags.insert(0, WHALE_TAG.to_string());
    }

    let win_rate = entry.win_rate * 100.0;
    let roi = estimate_roi(win_rate);
    let status = PerformanceStatus::from_win_rate(win_rate);
    let rounded_win_rate = round_half_up(win_rate);
    let now = Utc::now();

    let expertise = vec![
        Expertise {
            category: "International Politics".to_string(),
            win_rate: round_half_up(jitter.around(win_rate, 15.0)),
            trades: round_half_up(entry.total_trades as f64 * 0.6).max(0) as u64,
        },
        Expertise {
            category: "Geopolitics".to_string(),
            win_rate: round_half_up(jitter.around(win_rate, 15.0)),
            trades: round_half_up(entry.total_trades as f64 * 0.4).max(0) as u64,
        },
    ];

    TraderProfile {
        address: entry.address.clone(),
        short_address: short_address(&entry.address),
        tags,
        win_rate: rounded_win_rate,
        win_rate_7d: round_half_up(jitter.around(win_rate, 10.0)),
        win_rate_30d: round_half_up(jitter.around(win_rate, 5.0)),
        roi: round_half_up(roi),
        total_profit: round_half_up(entry.total_volume * (roi / 100.0)),
        total_trades: entry.total_trades,
        total_volume: entry.total_volume,
        expertise,
        recent_performance: RecentPerformance {
            period: "7d".to_string(),
            status,
            message: status.message().to_string(),
        },
        ai_review: ai_analysis
            .map(str::to_string)
            .unwrap_or_else(|| default_review(rounded_win_rate, entry.trader_type)),
        last_active: jitter.recent(now, 24.0),
        joined_at: jitter.days_ago(now, 90.0, 365.0),
    }
}

/// Map a trader detail response, preferring its AI analysis for the review.
pub fn trader_detail_to_profile(
    detail: &TraderDetailResponse,
    jitter: &mut Jitter,
) -> TraderProfile {
    let analysis = detail
        .ai_profile
        .as_ref()
        .and_then(|p| p.ai_analysis.as_deref());
    trader_to_profile(&detail.trader, analysis, jitter)
}

/// Map an AI-scored trader: base mapping plus its label tag.
pub fn ai_trader_to_profile(profile: &AiTraderProfile, jitter: &mut Jitter) -> TraderProfile {
    let mut base = trader_to_profile(&profile.trader, profile.ai_analysis.as_deref(), jitter);
    if let Some(label) = profile.label.as_deref().filter(|l| !l.is_empty()) {
        base.tags.push(label.to_string());
    }
    base
}

pub fn traders_with_fallback(
    data: Option<&[TraderLeaderboardEntry]>,
    jitter: &mut Jitter,
) -> Vec<TraderProfile> {
    or_fallback(data, mock::mock_traders, |entries| {
        debug!(count = entries.len(), "Adapting leaderboard");
        entries
            .iter()
            .map(|e| trader_to_profile(e, None, jitter))
            .collect()
    })
}

pub fn ai_traders_with_fallback(
    data: Option<&[AiTraderProfile]>,
    jitter: &mut Jitter,
) -> Vec<TraderProfile> {
    or_fallback(data, mock::mock_traders, |profiles| {
        profiles
            .iter()
            .map(|p| ai_trader_to_profile(p, jitter))
            .collect()
    })
}
