//! Full per-broker summary table.
//!
//! The presentation projection of the whole aggregate set, one row per
//! broker in first-appearance order, with the report's rounding conventions
//! applied. This is what the rendering collaborator serializes for the
//! summary display/export.

use crate::format::round1;
use branchflow_core::{BrokerAggregate, VALUE_UNIT};
use serde::{Deserialize, Serialize};

/// One presentation row of the per-broker summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerSummaryRow {
    pub broker: String,
    pub buy_lots: f64,
    pub avg_buy_price: f64,
    pub sell_lots: f64,
    pub avg_sell_price: f64,
    pub day_trade_lots: f64,
    /// Gross bought value in reported monetary units, 1 dp.
    pub total_buy_value: f64,
    /// Gross sold value in reported monetary units, 1 dp.
    pub total_sell_value: f64,
    pub net_buy_lots: f64,
    pub net_sell_lots: f64,
    /// Integer by report convention; exactly one of the net-value pair is
    /// non-zero unless the broker is flat.
    pub net_buy_value: i64,
    pub net_sell_value: i64,
    pub day_trade_pnl: f64,
}

/// Project aggregates onto summary rows.
pub fn summary_rows(aggs: &[BrokerAggregate]) -> Vec<BrokerSummaryRow> {
    aggs.iter()
        .map(|agg| BrokerSummaryRow {
            broker: agg.broker.clone(),
            buy_lots: round1(agg.buy_lots()),
            avg_buy_price: round1(agg.avg_buy_price),
            sell_lots: round1(agg.sell_lots()),
            avg_sell_price: round1(agg.avg_sell_price),
            day_trade_lots: round1(agg.day_trade_lots()),
            total_buy_value: round1(agg.total_buy_value / VALUE_UNIT),
            total_sell_value: round1(agg.total_sell_value / VALUE_UNIT),
            net_buy_lots: round1(agg.net_buy_lots()),
            net_sell_lots: round1(agg.net_sell_lots()),
            net_buy_value: round1(agg.net_buy_value).trunc() as i64,
            net_sell_value: round1(agg.net_sell_value).trunc() as i64,
            day_trade_pnl: round1(agg.day_trade_pnl),
        })
        .collect()
}
