//! Per-broker aggregation.
//!
//! Groups unified trade records by broker and derives weighted average
//! prices, net position, and day-trade volume/PnL. One accumulation pass
//! builds running weighted sums, a finalize pass computes the derived
//! fields; no library groupby, so float summation order is fixed.

use branchflow_core::{BrokerAggregate, TradeRecord, LOT_SIZE, VALUE_UNIT};
use std::collections::HashMap;

/// Running sums for one broker.
#[derive(Debug, Clone, Default)]
struct BrokerAccumulator {
    buy_shares: u64,
    sell_shares: u64,
    buy_value: f64,
    sell_value: f64,
}

impl BrokerAccumulator {
    /// Fold one record in. Each side only counts when its volume is
    /// positive; a record with both volumes positive contributes to both.
    fn add(&mut self, record: &TradeRecord) {
        if record.buy_shares > 0 {
            self.buy_shares += record.buy_shares;
            self.buy_value += record.buy_value();
        }
        if record.sell_shares > 0 {
            self.sell_shares += record.sell_shares;
            self.sell_value += record.sell_value();
        }
    }

    /// Compute the derived fields. Every zero-denominator case yields 0.0,
    /// never NaN.
    fn finalize(&self, broker: String) -> BrokerAggregate {
        let avg_buy_price = if self.buy_shares > 0 {
            self.buy_value / self.buy_shares as f64
        } else {
            0.0
        };
        let avg_sell_price = if self.sell_shares > 0 {
            self.sell_value / self.sell_shares as f64
        } else {
            0.0
        };

        let day_trade_shares = self.buy_shares.min(self.sell_shares);
        // Price difference quoted per lot, spread back over the matched
        // share volume, reported in VALUE_UNIT terms. The lot factor
        // cancels arithmetically but the report's magnitudes come from
        // this exact scaling.
        let day_trade_pnl = if day_trade_shares > 0 {
            (avg_sell_price - avg_buy_price) * LOT_SIZE * day_trade_shares as f64
                / (VALUE_UNIT * LOT_SIZE)
        } else {
            0.0
        };

        let net_shares = self.buy_shares as i64 - self.sell_shares as i64;
        // Net position valued at the same-side average price.
        let net_buy_value = if net_shares > 0 && avg_buy_price > 0.0 {
            net_shares as f64 * avg_buy_price / VALUE_UNIT
        } else {
            0.0
        };
        let net_sell_value = if net_shares < 0 && avg_sell_price > 0.0 {
            net_shares.unsigned_abs() as f64 * avg_sell_price / VALUE_UNIT
        } else {
            0.0
        };

        BrokerAggregate {
            broker,
            total_buy_shares: self.buy_shares,
            total_sell_shares: self.sell_shares,
            total_buy_value: self.buy_value,
            total_sell_value: self.sell_value,
            avg_buy_price,
            avg_sell_price,
            day_trade_shares,
            day_trade_pnl,
            net_shares,
            net_buy_value,
            net_sell_value,
        }
    }
}

/// Aggregate records into one [`BrokerAggregate`] per distinct broker.
///
/// Grouping is by exact string equality. Output order is broker
/// first-appearance order in the record sequence, which is the base order
/// the ranker's stable sorts tie-break on. Pure function; recomputing from
/// the same records yields identical aggregates.
pub fn aggregate(records: &[TradeRecord]) -> Vec<BrokerAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut accumulators: Vec<(&str, BrokerAccumulator)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.broker.as_str()).or_insert_with(|| {
            accumulators.push((record.broker.as_str(), BrokerAccumulator::default()));
            accumulators.len() - 1
        });
        accumulators[slot].1.add(record);
    }

    accumulators
        .into_iter()
        .map(|(broker, acc)| acc.finalize(broker.to_string()))
        .collect()
}
