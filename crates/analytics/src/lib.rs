//! Aggregation and ranking for the branchflow engine.
//!
//! This crate handles:
//! - Per-broker aggregation (weighted average prices, net position,
//!   day-trade volume and PnL)
//! - Top-N leaderboard views (net buyers, net sellers, day traders)
//! - Summary table projection and presentation formatting
//! - The end-to-end report analysis facade

pub mod aggregate;
pub mod analyzer;
pub mod format;
pub mod rank;
pub mod summary;

pub use aggregate::aggregate;
pub use analyzer::{ReportAnalysis, ReportAnalyzer};
pub use rank::{top_day_traders, top_net_buyers, top_net_sellers, DayTradeRow, NetBuyRow, NetSellRow};
pub use summary::{summary_rows, BrokerSummaryRow};
