//! Core data types for the branchflow engine.

use serde::{Deserialize, Serialize};

/// Shares per board lot, the standard reporting unit for exchange volume.
pub const LOT_SIZE: f64 = 1000.0;

/// Currency units per reported monetary unit (values are published in
/// ten-thousands of the base currency).
pub const VALUE_UNIT: f64 = 10_000.0;

/// Convert a raw share count to board lots.
#[inline]
pub fn shares_to_lots(shares: u64) -> f64 {
    shares as f64 / LOT_SIZE
}

/// A cleaned tabular report region: one header row plus data rows.
///
/// Produced by the report parser; consumed by the normalizer. Rows may have
/// uneven widths, the normalizer handles short rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Column labels from the report's header row.
    pub header: Vec<String>,
    /// Data rows below the header.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the data region is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One normalized broker trade observation.
///
/// The broker identifier is kept verbatim, noise characters included; it is
/// only cosmetically cleaned at render time, never during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Broker (branch) identifier, exactly as it appears in the report.
    pub broker: String,
    /// Trade price. Always present and finite for retained records.
    pub price: f64,
    /// Shares bought at this price (raw share count, not lots).
    pub buy_shares: u64,
    /// Shares sold at this price.
    pub sell_shares: u64,
}

impl TradeRecord {
    /// Whether this record carries no volume on either side.
    ///
    /// Idle records are retained by the normalizer but contribute nothing
    /// to aggregation.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.buy_shares == 0 && self.sell_shares == 0
    }

    /// Monetary value of the buy side (price x shares).
    #[inline]
    pub fn buy_value(&self) -> f64 {
        self.price * self.buy_shares as f64
    }

    /// Monetary value of the sell side.
    #[inline]
    pub fn sell_value(&self) -> f64 {
        self.price * self.sell_shares as f64
    }
}

/// Per-broker aggregate derived from the full record set of one report.
///
/// All fields are exact (unrounded); rounding happens only in presentation
/// projections. Computed once per report and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerAggregate {
    /// Broker identifier (verbatim from the records).
    pub broker: String,
    /// Sum of buy shares over records with buy volume.
    pub total_buy_shares: u64,
    /// Sum of sell shares over records with sell volume.
    pub total_sell_shares: u64,
    /// Total bought value in raw currency units.
    pub total_buy_value: f64,
    /// Total sold value in raw currency units.
    pub total_sell_value: f64,
    /// Share-weighted mean buy price; 0 when there is no buy volume.
    pub avg_buy_price: f64,
    /// Share-weighted mean sell price; 0 when there is no sell volume.
    pub avg_sell_price: f64,
    /// Matched round-trip volume: min(total_buy_shares, total_sell_shares).
    pub day_trade_shares: u64,
    /// P&L attributable to the matched volume, in reported monetary units.
    pub day_trade_pnl: f64,
    /// total_buy_shares - total_sell_shares; sign classifies the broker.
    pub net_shares: i64,
    /// Net position value at the average buy price, in reported monetary
    /// units; non-zero only for net buyers.
    pub net_buy_value: f64,
    /// Net position value at the average sell price; non-zero only for net
    /// sellers.
    pub net_sell_value: f64,
}

impl BrokerAggregate {
    /// Whether the broker bought more than it sold.
    #[inline]
    pub fn is_net_buyer(&self) -> bool {
        self.net_shares > 0
    }

    /// Whether the broker sold more than it bought.
    #[inline]
    pub fn is_net_seller(&self) -> bool {
        self.net_shares < 0
    }

    /// Whether buys and sells cancelled out exactly.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.net_shares == 0
    }

    /// Total bought volume in lots.
    #[inline]
    pub fn buy_lots(&self) -> f64 {
        shares_to_lots(self.total_buy_shares)
    }

    /// Total sold volume in lots.
    #[inline]
    pub fn sell_lots(&self) -> f64 {
        shares_to_lots(self.total_sell_shares)
    }

    /// Matched day-trade volume in lots.
    #[inline]
    pub fn day_trade_lots(&self) -> f64 {
        shares_to_lots(self.day_trade_shares)
    }

    /// Net bought volume in lots; 0 for net sellers and flat brokers.
    #[inline]
    pub fn net_buy_lots(&self) -> f64 {
        if self.net_shares > 0 {
            self.net_shares as f64 / LOT_SIZE
        } else {
            0.0
        }
    }

    /// Net sold volume in lots; 0 for net buyers and flat brokers.
    #[inline]
    pub fn net_sell_lots(&self) -> f64 {
        if self.net_shares < 0 {
            self.net_shares.unsigned_abs() as f64 / LOT_SIZE
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_aggregate(broker: &str) -> BrokerAggregate {
        BrokerAggregate {
            broker: broker.to_string(),
            total_buy_shares: 0,
            total_sell_shares: 0,
            total_buy_value: 0.0,
            total_sell_value: 0.0,
            avg_buy_price: 0.0,
            avg_sell_price: 0.0,
            day_trade_shares: 0,
            day_trade_pnl: 0.0,
            net_shares: 0,
            net_buy_value: 0.0,
            net_sell_value: 0.0,
        }
    }

    #[test]
    fn test_shares_to_lots() {
        assert!((shares_to_lots(1500) - 1.5).abs() < 1e-10);
        assert!((shares_to_lots(0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_record_is_idle() {
        let rec = TradeRecord {
            broker: "1234 測試".to_string(),
            price: 25.5,
            buy_shares: 0,
            sell_shares: 0,
        };
        assert!(rec.is_idle());

        let active = TradeRecord {
            sell_shares: 100,
            ..rec
        };
        assert!(!active.is_idle());
    }

    #[test]
    fn test_record_values() {
        let rec = TradeRecord {
            broker: "A".to_string(),
            price: 10.0,
            buy_shares: 2000,
            sell_shares: 500,
        };
        assert!((rec.buy_value() - 20_000.0).abs() < 1e-10);
        assert!((rec.sell_value() - 5_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_net_classification() {
        let mut agg = flat_aggregate("A");
        assert!(agg.is_flat());
        assert!(!agg.is_net_buyer());
        assert!(!agg.is_net_seller());

        agg.net_shares = 3000;
        assert!(agg.is_net_buyer());
        assert!((agg.net_buy_lots() - 3.0).abs() < 1e-10);
        assert!((agg.net_sell_lots() - 0.0).abs() < 1e-10);

        agg.net_shares = -1500;
        assert!(agg.is_net_seller());
        assert!((agg.net_buy_lots() - 0.0).abs() < 1e-10);
        assert!((agg.net_sell_lots() - 1.5).abs() < 1e-10);
    }
}
