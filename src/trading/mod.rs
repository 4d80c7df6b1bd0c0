//! Follow configuration, P&L simulation and the following overview.

mod config;
mod overview;
mod simulator;

pub use config::{
    FollowConfig, FollowConfigPatch, MAX_COPY_RATIO, MAX_VIRTUAL_CAPITAL, MIN_COPY_RATIO,
    MIN_VIRTUAL_CAPITAL,
};
pub use overview::{join_followed, summarize, FollowFilter};
pub use simulator::{calculate_simulated_pnl, simulate_with, SimulatedPnl};
