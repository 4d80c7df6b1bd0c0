//! Polymarket trader follower
//!
//! Follow traders in simulation, estimate copy-trading P&L from their track
//! record, and watch whale activity from the insight backend.

mod adapter;
mod api;
mod config;
mod db;
mod error;
mod models;
mod query;
mod trading;

use std::ops::RangeInclusive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::adapter::{
    ai_traders_with_fallback, alerts_with_fallback, combine_dashboard_data, format_usd,
    insider_alerts_with_fallback, market_to_view, markets_with_fallback, trader_detail_to_profile,
    trades_with_fallback, traders_with_fallback, whale_trade_to_trade, Jitter,
};
use crate::api::{
    ApiClient, InsiderAlertsQueryParams, LeaderboardQueryParams, MarketsQueryParams, TraderType,
    WhaleTradesResponse, WhalesQueryParams,
};
use crate::config::AppConfig;
use crate::db::{FollowStore, SqliteStore};
use crate::models::{Alert, TradeView, TraderProfile};
use crate::query::{endpoints, HealthMonitor, Poller, Query, QueryState};
use crate::trading::{
    calculate_simulated_pnl, join_followed, summarize, FollowConfig, FollowConfigPatch,
    FollowFilter, MAX_COPY_RATIO, MAX_VIRTUAL_CAPITAL, MIN_COPY_RATIO, MIN_VIRTUAL_CAPITAL,
};

const COPY_RATIO_RANGE: RangeInclusive<i64> = MIN_COPY_RATIO as i64..=MAX_COPY_RATIO as i64;
const CAPITAL_RANGE: RangeInclusive<u64> = MIN_VIRTUAL_CAPITAL..=MAX_VIRTUAL_CAPITAL;

/// Polymarket trader follower CLI.
#[derive(Parser)]
#[command(name = "polyfollow")]
#[command(about = "Follow Polymarket traders and simulate copy-trading P&L", long_about = None)]
struct Cli {
    /// Database URL holding the follow list
    #[arg(short, long, env = "POLYFOLLOW_DATABASE")]
    database: Option<String>,

    /// Insight backend base URL
    #[arg(long, env = "POLYFOLLOW_API_URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow a trader in simulation
    Follow {
        /// Trader's wallet address
        address: String,

        /// Percent of virtual capital to allocate (10-100)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(COPY_RATIO_RANGE))]
        ratio: Option<u32>,

        /// Maximum USD per copied trade
        #[arg(short, long, value_parser = parse_positive_decimal)]
        max_per_trade: Option<Decimal>,

        /// Virtual capital in USD (1000-50000)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(CAPITAL_RANGE))]
        capital: Option<u64>,

        /// Follow without simulating copies for now
        #[arg(long)]
        disabled: bool,
    },

    /// Stop following a trader
    Unfollow {
        /// Trader's wallet address
        address: String,
    },

    /// Change the follow settings of a followed trader
    Configure {
        /// Trader's wallet address
        address: String,

        /// Resume simulated copying
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Pause simulated copying, keeping the settings
        #[arg(long)]
        disable: bool,

        /// Percent of virtual capital to allocate (10-100)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(COPY_RATIO_RANGE))]
        ratio: Option<u32>,

        /// Maximum USD per copied trade
        #[arg(short, long, value_parser = parse_positive_decimal)]
        max_per_trade: Option<Decimal>,

        /// Virtual capital in USD (1000-50000)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(CAPITAL_RANGE))]
        capital: Option<u64>,
    },

    /// Show followed traders with simulated P&L
    Following {
        /// Which traders to show (all, active, warning)
        #[arg(short, long, default_value_t = FollowFilter::All)]
        filter: FollowFilter,
    },

    /// Show the trader leaderboard
    Traders {
        /// Maximum number of traders to show
        #[arg(short, long, default_value = "20")]
        limit: u32,

        /// Minimum number of trades
        #[arg(short, long)]
        min_trades: Option<u32>,

        /// Only this trader type (smart_money, dumb_money, normal)
        #[arg(short, long)]
        trader_type: Option<TraderType>,

        /// Use the AI-scored leaderboard
        #[arg(long)]
        ai: bool,
    },

    /// Show a trader's profile
    Trader {
        /// Trader's wallet address
        address: String,
    },

    /// List prediction markets
    Markets {
        /// Maximum number of markets to show
        #[arg(short, long, default_value = "20")]
        limit: u32,

        /// Only markets still trading
        #[arg(long)]
        active_only: bool,
    },

    /// Show one market and its recent trades
    Market {
        /// Market slug
        slug: String,
    },

    /// Show the live whale trade feed
    Whales {
        /// Maximum number of trades to fetch
        #[arg(short, long, default_value = "20")]
        limit: u32,

        /// Only trades in this market
        #[arg(short, long)]
        market: Option<String>,

        /// Keep polling until Ctrl+C
        #[arg(short, long)]
        watch: bool,
    },

    /// Show insider trading alerts
    Alerts {
        /// Only alerts flagged as suspect
        #[arg(long)]
        suspect_only: bool,

        /// Maximum number of alerts to show
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },

    /// Show the dashboard overview
    Dashboard,

    /// Check backend connectivity
    Health {
        /// Keep probing until Ctrl+C
        #[arg(short, long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = AppConfig::from_env()?;
    if let Some(database) = cli.database {
        config.database_url = database;
    }
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let api = ApiClient::with_timeout(&config.api_url, config.request_timeout)?;
    debug!(api = %api.base_url(), database = %config.database_url, "Configured");

    let storage = SqliteStore::new(&config.database_url).await?;
    let mut store = FollowStore::load(storage).await;
    debug!(loaded = store.is_loaded(), followed = store.count(), "Follow list ready");

    match cli.command {
        Commands::Follow {
            address,
            ratio,
            max_per_trade,
            capital,
            disabled,
        } => {
            let patch = FollowConfigPatch {
                enabled: disabled.then_some(false),
                copy_ratio: ratio.map(Decimal::from),
                max_per_trade,
                virtual_capital: capital.map(Decimal::from),
            };
            let overrides = (!patch.is_empty()).then_some(&patch);

            if store.follow(&address, overrides).await {
                println!("Now following: {}", address);
            } else {
                println!(
                    "Already following {}. Use 'polyfollow configure' to change settings.",
                    address
                );
            }

            if let Some(config) = store.get_config(&address) {
                print_follow_config(&config);
            }
        }

        Commands::Unfollow { address } => {
            if store.unfollow(&address).await {
                println!("Stopped following: {}", address);
            } else {
                println!("Not following {}", address);
            }
        }

        Commands::Configure {
            address,
            enable,
            disable,
            ratio,
            max_per_trade,
            capital,
        } => {
            let patch = FollowConfigPatch {
                enabled: if enable {
                    Some(true)
                } else if disable {
                    Some(false)
                } else {
                    None
                },
                copy_ratio: ratio.map(Decimal::from),
                max_per_trade,
                virtual_capital: capital.map(Decimal::from),
            };

            if patch.is_empty() {
                println!("Nothing to change. See 'polyfollow configure --help'.");
                return Ok(());
            }

            if !store.update_config(&address, &patch).await {
                println!(
                    "Not following {}. Use 'polyfollow follow {}' first.",
                    address, address
                );
                return Ok(());
            }

            println!("Updated: {}", address);
            if let Some(config) = store.get_config(&address) {
                print_follow_config(&config);
            }
        }

        Commands::Following { filter } => {
            if store.count() == 0 {
                println!("Not following anyone. Use 'polyfollow follow <address>' to start.");
                return Ok(());
            }

            let (leaderboard, whales) = tokio::join!(
                Query::mount(endpoints::traders_leaderboard(
                    &api,
                    LeaderboardQueryParams {
                        limit: Some(100),
                        min_trades: Some(3),
                        trader_type: None,
                    },
                )),
                Query::mount(endpoints::whales_live(
                    &api,
                    WhalesQueryParams {
                        limit: Some(20),
                        ..Default::default()
                    },
                )),
            );
            let leaderboard = leaderboard.snapshot().await;
            let whales = whales.snapshot().await;
            report_failure("leaderboard", &leaderboard);

            let mut jitter = Jitter::from_entropy();
            let traders = traders_with_fallback(list_data(&leaderboard), &mut jitter);
            let entries = join_followed(store.followed_traders(), &traders, &mut jitter);
            let live = whales.data.as_ref().map(|r| r.data.len()).unwrap_or(0);
            let overview = summarize(&entries, store.count(), live);

            println!("\n=== Following ===");
            println!("Followed:         {}", overview.total_followed);
            println!("Performing well:  {}", overview.active_followed);
            println!("Total Invested:   ${:.2}", overview.total_invested);
            println!("Total P&L:        {}", signed_usd(overview.total_pnl));
            println!("Whale Trades:     {}", overview.today_activities);

            println!(
                "\n{:<14} {:<8} {:>6} {:>7} {:>8} {:>12} {:>12} {:>7}",
                "TRADER", "STATUS", "WIN%", "ROI%", "RATIO", "INVESTED", "P&L", "TRADES"
            );
            println!("{}", "-".repeat(82));

            for entry in entries.iter().filter(|e| filter.keeps(e)) {
                let ratio = if entry.config.enabled {
                    format!("{}%", entry.config.copy_ratio)
                } else {
                    "paused".to_string()
                };
                println!(
                    "{:<14} {:<8} {:>5}% {:>6}% {:>8} {:>12} {:>12} {:>7}",
                    entry.trader.short_address,
                    entry.trader.status().as_str(),
                    entry.trader.win_rate,
                    entry.trader.roi,
                    ratio,
                    format!("${:.2}", entry.simulated.invested),
                    signed_usd(entry.simulated.pnl),
                    entry.simulated.trades
                );
            }

            let missing: Vec<String> = store
                .followed_addresses()
                .into_iter()
                .filter(|a| !entries.iter().any(|e| &e.address == a))
                .collect();
            if !missing.is_empty() {
                println!("\nNo profile data for:");
                for address in missing {
                    println!("  {}", address);
                }
            }
        }

        Commands::Traders {
            limit,
            min_trades,
            trader_type,
            ai,
        } => {
            let params = LeaderboardQueryParams {
                limit: Some(limit),
                min_trades,
                trader_type,
            };
            let mut jitter = Jitter::from_entropy();

            let traders = if ai {
                let query = Query::mount(endpoints::ai_leaderboard(&api, params)).await;
                let state = query.snapshot().await;
                report_failure(query.key().as_str(), &state);
                ai_traders_with_fallback(list_data(&state), &mut jitter)
            } else {
                let mut query =
                    Query::mount(endpoints::traders_leaderboard(&api, params.clone())).await;
                if params.min_trades.is_some() && came_back_empty(&query.snapshot().await) {
                    info!("No traders meet the trade minimum, showing the full leaderboard");
                    let relaxed = LeaderboardQueryParams {
                        min_trades: None,
                        ..params
                    };
                    query
                        .set_source(endpoints::traders_leaderboard(&api, relaxed))
                        .await;
                }
                let state = query.snapshot().await;
                report_failure(query.key().as_str(), &state);
                traders_with_fallback(list_data(&state), &mut jitter)
            };

            print_traders(&traders, &store);
        }

        Commands::Trader { address } => {
            let query = Query::mount(endpoints::trader_detail(&api, &address)).await;
            let state = query.snapshot().await;
            let Some(detail) = state.data else {
                let reason = state
                    .error
                    .map(|e| e.message().to_string())
                    .unwrap_or_default();
                anyhow::bail!("Failed to load trader {}: {}", address, reason);
            };

            let profile = trader_detail_to_profile(&detail, &mut Jitter::from_entropy());
            print_trader(&profile);

            if let Some(config) = store.get_config(&profile.address) {
                let sim = calculate_simulated_pnl(Decimal::from(profile.roi), &config);
                println!("\n--- Following ---");
                println!("Copying:        {}", if config.enabled { "Yes" } else { "Paused" });
                println!("Invested:       ${:.2}", sim.invested);
                println!("Simulated P&L:  {}", signed_usd(sim.pnl));
                println!("Copied Trades:  {}", sim.trades);
            }

            let trades: Vec<TradeView> = detail
                .recent_trades
                .iter()
                .map(whale_trade_to_trade)
                .collect();
            if !trades.is_empty() {
                println!("\n--- Recent Trades ({}) ---", trades.len());
                print_trades(&trades);
            }
        }

        Commands::Markets { limit, active_only } => {
            let query = Query::mount(endpoints::markets(
                &api,
                MarketsQueryParams {
                    limit: Some(limit),
                    offset: None,
                    active_only: active_only.then_some(true),
                },
            ))
            .await;
            let state = query.snapshot().await;
            report_failure("markets", &state);

            let markets = markets_with_fallback(list_data(&state), &mut Jitter::from_entropy());

            println!(
                "\n{:<4} {:<50} {:<12} {:>6} {:>8} {:>14}",
                "#", "QUESTION", "STATUS", "YES", "24H", "VOLUME"
            );
            println!("{}", "-".repeat(99));
            for market in markets.iter().filter(|m| !active_only || m.is_active()) {
                println!(
                    "{:<4} {:<50} {:<12} {:>6.2} {:>7.1}% {:>14}",
                    market.id,
                    truncate(&market.title, 48),
                    market.status.as_str(),
                    market.yes_price,
                    market.price_change_24h,
                    format_usd(market.volume_24h)
                );
            }

            if let Some(total) = state.data.as_ref().and_then(|r| r.total) {
                println!("\nShowing {} of {} markets", markets.len(), total);
            }
        }

        Commands::Market { slug } => {
            let query = Query::mount(endpoints::market_detail(&api, &slug)).await;
            let state = query.snapshot().await;
            let Some(detail) = state.data else {
                let reason = state
                    .error
                    .map(|e| e.message().to_string())
                    .unwrap_or_default();
                anyhow::bail!("Failed to load market {}: {}", slug, reason);
            };

            let market = market_to_view(&detail.market, 0, &mut Jitter::from_entropy());

            println!("\n=== {} ===", market.title);
            println!("Slug:        {}", market.slug);
            println!("Category:    {}", market.subcategory);
            println!("Status:      {}", market.status.as_str());
            println!("Yes / No:    {:.2} / {:.2}", market.yes_price, market.no_price);
            println!("24h Change:  {:.1}%", market.price_change_24h);
            println!("24h Volume:  {}", format_usd(market.volume_24h));
            println!("Liquidity:   {:.1}%", market.liquidity);
            println!("Ends:        {}", market.end_date.format("%Y-%m-%d"));

            println!("\n--- 7 Day Price ---");
            for point in &market.price_history_7d {
                println!("  {}  {:.3}", point.timestamp.format("%m-%d"), point.price);
            }

            let trades: Vec<TradeView> = detail
                .recent_trades
                .iter()
                .map(whale_trade_to_trade)
                .collect();
            println!("\n--- Recent Trades ({}) ---", trades.len());
            print_trades(&trades);
        }

        Commands::Whales {
            limit,
            market,
            watch,
        } => {
            let mut widened = market.is_none();
            let source = endpoints::whales_live(
                &api,
                WhalesQueryParams {
                    limit: Some(limit),
                    offset: None,
                    market_slug: market,
                },
            );

            if watch {
                info!(interval_secs = config.poll_interval.as_secs(), "Watching whale feed");
                println!("Watching whale trades. Press Ctrl+C to stop.\n");

                let mut poller = Poller::start(source, config.poll_interval);
                let mut updates = poller.subscribe();

                loop {
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => {
                            println!("\nStopping...");
                            break;
                        }
                        changed = updates.changed() => {
                            if changed.is_err() {
                                break;
                            }
                            let state = updates.borrow_and_update().clone();
                            if !widened && came_back_empty(&state) {
                                widened = true;
                                info!("No whale trades in that market, watching the full feed");
                                let everything = WhalesQueryParams {
                                    limit: Some(limit),
                                    ..Default::default()
                                };
                                if poller.restart(endpoints::whales_live(&api, everything)) {
                                    updates = poller.subscribe();
                                    continue;
                                }
                            }
                            print_whale_feed(&state);
                        }
                    }
                }

                poller.teardown();
            } else {
                let query = Query::mount(source).await;
                print_whale_feed(&query.snapshot().await);
            }
        }

        Commands::Alerts {
            suspect_only,
            limit,
        } => {
            let query = Query::mount(endpoints::insider_alerts(
                &api,
                InsiderAlertsQueryParams {
                    suspect_only: suspect_only.then_some(true),
                    limit: Some(limit),
                    offset: None,
                },
            ))
            .await;
            let state = query.snapshot().await;
            report_failure("insider alerts", &state);

            print_alerts(&insider_alerts_with_fallback(list_data(&state)));
        }

        Commands::Dashboard => {
            let (markets, leaderboard, whales) = tokio::join!(
                Query::mount(endpoints::markets(&api, MarketsQueryParams::default())),
                Query::mount(endpoints::traders_leaderboard(
                    &api,
                    LeaderboardQueryParams::default(),
                )),
                Query::mount(endpoints::whales_live(&api, WhalesQueryParams::default())),
            );
            let markets = markets.snapshot().await;
            let leaderboard = leaderboard.snapshot().await;
            let whales = whales.snapshot().await;
            report_failure("markets", &markets);
            report_failure("leaderboard", &leaderboard);
            report_failure("whales", &whales);

            let data = combine_dashboard_data(
                list_data(&markets),
                list_data(&leaderboard),
                list_data(&whales),
                &mut Jitter::from_entropy(),
            );

            println!("\n=== Hot Markets ===");
            for market in data.markets.iter().take(5) {
                println!(
                    "  {:<50} {:.2} ({:+.1}%)",
                    truncate(&market.title, 48),
                    market.current_price,
                    market.price_change_24h
                );
            }

            println!("\n=== Top Traders ===");
            for trader in data.traders.iter().take(5) {
                println!(
                    "  {:<14} {:>5}% win  {:>6}% ROI  {}",
                    trader.short_address,
                    trader.win_rate,
                    trader.roi,
                    trader.tags.join(", ")
                );
            }

            println!("\n=== Sentiment ===");
            for reading in &data.sentiment {
                println!(
                    "  {:<24} bull {:>3}%  bear {:>3}%  neutral {:>3}%",
                    reading.topic,
                    reading.bullish,
                    reading.bearish,
                    reading.neutral()
                );
            }

            println!("\n=== Alerts ===");
            print_alerts(&data.alerts);

            println!("\n=== Live Trades ===");
            print_trades(&data.trades);
        }

        Commands::Health { watch } => {
            if watch {
                let monitor =
                    HealthMonitor::start(endpoints::health_probe(&api), config.health_interval);
                println!(
                    "Probing {} every {}s. Press Ctrl+C to stop.\n",
                    api.base_url(),
                    config.health_interval.as_secs()
                );

                let mut last: Option<bool> = None;
                loop {
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => {
                            println!("\nStopping...");
                            break;
                        }
                        _ = tokio::time::sleep(std::time::Duration::from_millis(250)) => {}
                    }

                    if monitor.is_checking() {
                        continue;
                    }
                    let connected = monitor.is_connected();
                    if last != Some(connected) {
                        println!(
                            "[{}] {}",
                            chrono::Local::now().format("%H:%M:%S"),
                            if connected { "Connected" } else { "Disconnected" }
                        );
                        last = Some(connected);
                    }
                }

                monitor.stop();
            } else {
                match api.health_check().await {
                    Ok(health) => println!("Backend {}: {}", api.base_url(), health.status),
                    Err(e) => {
                        warn!(error = %e, "Health check failed");
                        println!("Backend {}: unreachable", api.base_url());
                    }
                }
            }
        }
    }

    Ok(())
}

fn parse_positive_decimal(s: &str) -> Result<Decimal, String> {
    let value: Decimal = s.parse().map_err(|e| format!("{}", e))?;
    if value <= Decimal::ZERO {
        return Err("must be greater than 0".to_string());
    }
    Ok(value)
}

/// The list payload of a list query, if it has one.
fn list_data<T>(state: &QueryState<api::ListResponse<T>>) -> Option<&[T]> {
    state.data.as_ref().map(|r| r.data.as_slice())
}

/// True when a list query succeeded with no rows.
fn came_back_empty<T>(state: &QueryState<api::ListResponse<T>>) -> bool {
    state.data.as_ref().is_some_and(|r| r.data.is_empty())
}

fn report_failure<T>(what: &str, state: &QueryState<T>) {
    if let Some(e) = &state.error {
        warn!(query = %what, error = %e, "Request failed, showing fallback data");
    }
}

fn print_follow_config(config: &FollowConfig) {
    println!("\nSettings:");
    println!("  Copying:        {}", if config.enabled { "Yes" } else { "Paused" });
    println!("  Copy Ratio:     {}%", config.copy_ratio);
    println!("  Max Per Trade:  ${}", config.max_per_trade);
    println!("  Capital:        ${}", config.virtual_capital);
}

fn print_traders(traders: &[TraderProfile], store: &FollowStore<SqliteStore>) {
    println!(
        "\n{:<2} {:<14} {:<30} {:>6} {:>7} {:>12} {:>8} {:<8}",
        "", "TRADER", "TAGS", "WIN%", "ROI%", "PROFIT", "TRADES", "STATUS"
    );
    println!("{}", "-".repeat(94));

    for trader in traders {
        let mark = if store.is_following(&trader.address) { "*" } else { "" };
        println!(
            "{:<2} {:<14} {:<30} {:>5}% {:>6}% {:>12} {:>8} {:<8}",
            mark,
            trader.short_address,
            truncate(&trader.tags.join(", "), 28),
            trader.win_rate,
            trader.roi,
            format_usd(trader.total_profit as f64),
            trader.total_trades,
            trader.status().as_str()
        );
    }
}

fn print_trader(trader: &TraderProfile) {
    println!("\n=== Trader: {} ===", trader.short_address);
    println!("Address:       {}", trader.address);
    println!("Tags:          {}", trader.tags.join(", "));

    println!("\n--- Performance ---");
    println!("Win Rate:      {}%", trader.win_rate);
    println!("Win Rate 7d:   {}%", trader.win_rate_7d);
    println!("Win Rate 30d:  {}%", trader.win_rate_30d);
    println!("ROI:           {}%", trader.roi);
    println!("Total Profit:  {}", format_usd(trader.total_profit as f64));
    println!("Total Trades:  {}", trader.total_trades);
    println!("Total Volume:  {}", format_usd(trader.total_volume));
    println!(
        "Recent:        {} ({})",
        trader.recent_performance.message,
        trader.status().as_str()
    );

    println!("\n--- Expertise ---");
    for e in &trader.expertise {
        println!("  {:<24} {:>3}% over {} trades", e.category, e.win_rate, e.trades);
    }

    println!("\n--- Review ---");
    println!("{}", trader.ai_review);
    println!(
        "\nLast active {}, joined {}",
        trader.last_active.format("%Y-%m-%d %H:%M"),
        trader.joined_at.format("%Y-%m-%d")
    );
}

fn print_whale_feed(state: &QueryState<WhaleTradesResponse>) {
    report_failure("whales", state);
    let whales = list_data(state);

    println!("[{}]", chrono::Local::now().format("%H:%M:%S"));
    print_alerts(&alerts_with_fallback(whales));
    println!();
    print_trades(&trades_with_fallback(whales));
    println!();
}

fn print_alerts(alerts: &[Alert]) {
    for alert in alerts {
        println!(
            "  {} {}  {}  ({})",
            alert.icon,
            alert.timestamp.format("%m-%d %H:%M"),
            alert.message,
            alert.link
        );
    }
}

fn print_trades(trades: &[TradeView]) {
    for trade in trades {
        println!(
            "  {} {:<4} {:<14} {:<6} {:>10.2} @ {:.2}  ${:.2}",
            trade.timestamp.format("%H:%M:%S"),
            trade.side.as_str(),
            truncate(&trade.maker, 14),
            truncate(&trade.outcome, 6),
            trade.size,
            trade.price,
            trade.notional()
        );
    }
}

fn signed_usd(amount: Decimal) -> String {
    if amount >= Decimal::ZERO {
        format!("+${:.2}", amount)
    } else {
        format!("-${:.2}", amount.abs())
    }
}

/// Truncate a string with ellipsis if too long.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer question", 10), "a much ...");
    }

    #[test]
    fn test_parse_positive_decimal() {
        assert_eq!(parse_positive_decimal("250.5"), Ok(dec!(250.5)));
        assert!(parse_positive_decimal("0").is_err());
        assert!(parse_positive_decimal("abc").is_err());
    }

    #[test]
    fn test_came_back_empty() {
        let mut state: QueryState<api::ListResponse<u32>> = QueryState::default();
        assert!(!came_back_empty(&state));

        state.data = Some(api::ListResponse {
            data: vec![],
            total: Some(0),
        });
        assert!(came_back_empty(&state));

        state.data = Some(api::ListResponse {
            data: vec![1],
            total: None,
        });
        assert!(!came_back_empty(&state));
    }

    #[test]
    fn test_signed_usd() {
        assert_eq!(signed_usd(dec!(300)), "+$300.00");
        assert_eq!(signed_usd(dec!(-12.5)), "-$12.50");
    }

    #[test]
    fn test_cli_enforces_ranges() {
        assert!(Cli::try_parse_from(["polyfollow", "follow", "0xabc", "--ratio", "50"]).is_ok());
        assert!(Cli::try_parse_from(["polyfollow", "follow", "0xabc", "--ratio", "5"]).is_err());
        assert!(
            Cli::try_parse_from(["polyfollow", "follow", "0xabc", "--capital", "60000"]).is_err()
        );
        assert!(Cli::try_parse_from([
            "polyfollow",
            "configure",
            "0xabc",
            "--enable",
            "--disable"
        ])
        .is_err());
    }
}
