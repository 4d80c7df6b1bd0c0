//! Insight backend client and its wire types.

mod client;
mod types;

pub use client::ApiClient;
pub use types::*;
