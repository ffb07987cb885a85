//! Top-N leaderboard views over broker aggregates.
//!
//! Each view is a stable descending sort on its key, truncated to N rows
//! and projected onto a fixed column set with presentation rounding
//! applied. Ties keep the aggregates' first-appearance order, so the views
//! are deterministic. Brokers with a zero key are not filtered; they simply
//! rank last.

use crate::format::round1;
use branchflow_core::BrokerAggregate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// One row of the net-buyer leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetBuyRow {
    /// 1-based rank.
    pub rank: u32,
    pub broker: String,
    pub buy_lots: f64,
    pub avg_buy_price: f64,
    pub sell_lots: f64,
    pub avg_sell_price: f64,
    pub net_buy_lots: f64,
    /// Integer by report convention, unlike the 1-dp gross columns.
    pub net_buy_value: i64,
}

/// One row of the net-seller leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetSellRow {
    /// 1-based rank.
    pub rank: u32,
    pub broker: String,
    pub buy_lots: f64,
    pub avg_buy_price: f64,
    pub sell_lots: f64,
    pub avg_sell_price: f64,
    pub net_sell_lots: f64,
    /// Integer by report convention.
    pub net_sell_value: i64,
}

/// One row of the day-trade leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTradeRow {
    /// 1-based rank.
    pub rank: u32,
    pub broker: String,
    pub buy_lots: f64,
    pub avg_buy_price: f64,
    pub sell_lots: f64,
    pub avg_sell_price: f64,
    pub day_trade_lots: f64,
    pub day_trade_pnl: f64,
}

/// Stable descending order of aggregates by a rounded lot key.
///
/// The key is the rounded value because that is the column the rendered
/// table sorts on; rounding is monotone, so only tie granularity differs
/// from sorting the raw shares.
fn ranked_by<'a, F>(aggs: &'a [BrokerAggregate], n: usize, key: F) -> Vec<&'a BrokerAggregate>
where
    F: Fn(&BrokerAggregate) -> f64,
{
    let mut sorted: Vec<&BrokerAggregate> = aggs.iter().collect();
    sorted.sort_by(|a, b| OrderedFloat(round1(key(b))).cmp(&OrderedFloat(round1(key(a)))));
    sorted.truncate(n);
    sorted
}

/// Top-N net buyers, keyed on net bought lots.
pub fn top_net_buyers(aggs: &[BrokerAggregate], n: usize) -> Vec<NetBuyRow> {
    ranked_by(aggs, n, BrokerAggregate::net_buy_lots)
        .into_iter()
        .enumerate()
        .map(|(i, agg)| NetBuyRow {
            rank: i as u32 + 1,
            broker: agg.broker.clone(),
            buy_lots: round1(agg.buy_lots()),
            avg_buy_price: round1(agg.avg_buy_price),
            sell_lots: round1(agg.sell_lots()),
            avg_sell_price: round1(agg.avg_sell_price),
            net_buy_lots: round1(agg.net_buy_lots()),
            net_buy_value: round1(agg.net_buy_value).trunc() as i64,
        })
        .collect()
}

/// Top-N net sellers, keyed on net sold lots.
pub fn top_net_sellers(aggs: &[BrokerAggregate], n: usize) -> Vec<NetSellRow> {
    ranked_by(aggs, n, BrokerAggregate::net_sell_lots)
        .into_iter()
        .enumerate()
        .map(|(i, agg)| NetSellRow {
            rank: i as u32 + 1,
            broker: agg.broker.clone(),
            buy_lots: round1(agg.buy_lots()),
            avg_buy_price: round1(agg.avg_buy_price),
            sell_lots: round1(agg.sell_lots()),
            avg_sell_price: round1(agg.avg_sell_price),
            net_sell_lots: round1(agg.net_sell_lots()),
            net_sell_value: round1(agg.net_sell_value).trunc() as i64,
        })
        .collect()
}

/// Top-N day traders, keyed on matched day-trade lots.
pub fn top_day_traders(aggs: &[BrokerAggregate], n: usize) -> Vec<DayTradeRow> {
    ranked_by(aggs, n, BrokerAggregate::day_trade_lots)
        .into_iter()
        .enumerate()
        .map(|(i, agg)| DayTradeRow {
            rank: i as u32 + 1,
            broker: agg.broker.clone(),
            buy_lots: round1(agg.buy_lots()),
            avg_buy_price: round1(agg.avg_buy_price),
            sell_lots: round1(agg.sell_lots()),
            avg_sell_price: round1(agg.avg_sell_price),
            day_trade_lots: round1(agg.day_trade_lots()),
            day_trade_pnl: round1(agg.day_trade_pnl),
        })
        .collect()
}
