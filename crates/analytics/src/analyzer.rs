//! Report analysis engine.
//!
//! Composes parsing, normalization, aggregation, and ranking into one
//! facade. Each analyze call is a full stateless recomputation from the
//! raw input; nothing is cached across reports.

use crate::{
    aggregate::aggregate,
    rank::{top_day_traders, top_net_buyers, top_net_sellers, DayTradeRow, NetBuyRow, NetSellRow},
    summary::{summary_rows, BrokerSummaryRow},
};
use branchflow_core::{BrokerAggregate, Config, RawTable, Result, TradeRecord};
use branchflow_ingestion::{normalize, parse_report};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Complete analysis of one daily report.
///
/// The date is a label carried through for downstream rendering; it plays
/// no part in any computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAnalysis {
    /// Report date label.
    pub date: NaiveDate,
    /// Normalized record set (for raw-data display/export).
    pub records: Vec<TradeRecord>,
    /// Exact per-broker aggregates in first-appearance order.
    pub aggregates: Vec<BrokerAggregate>,
    /// Rounded per-broker summary table.
    pub summary: Vec<BrokerSummaryRow>,
    /// Net-buyer leaderboard.
    pub top_net_buyers: Vec<NetBuyRow>,
    /// Net-seller leaderboard.
    pub top_net_sellers: Vec<NetSellRow>,
    /// Day-trade leaderboard.
    pub top_day_traders: Vec<DayTradeRow>,
}

impl ReportAnalysis {
    /// Number of distinct brokers in the report.
    #[inline]
    pub fn broker_count(&self) -> usize {
        self.aggregates.len()
    }

    /// Whether the report produced no usable records.
    ///
    /// An Ok-but-empty analysis is "success with zero brokers"; a raw-parse
    /// failure never reaches this type.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Stateless analysis engine configured once and reused across reports.
pub struct ReportAnalyzer {
    config: Config,
}

impl ReportAnalyzer {
    /// Create an analyzer from configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Analyze decoded report text end to end.
    pub fn analyze_report(&self, content: &str, date: NaiveDate) -> Result<ReportAnalysis> {
        let table = parse_report(content, &self.config.layout)?;
        Ok(self.analyze_table(&table, date))
    }

    /// Analyze an already-parsed raw table.
    pub fn analyze_table(&self, table: &RawTable, date: NaiveDate) -> ReportAnalysis {
        self.analyze_records(normalize(table), date)
    }

    /// Analyze an already-normalized record set.
    pub fn analyze_records(&self, records: Vec<TradeRecord>, date: NaiveDate) -> ReportAnalysis {
        let aggregates = aggregate(&records);
        let n = self.config.ranking.top_n;

        tracing::debug!(
            records = records.len(),
            brokers = aggregates.len(),
            top_n = n,
            "computed report analysis"
        );

        ReportAnalysis {
            date,
            summary: summary_rows(&aggregates),
            top_net_buyers: top_net_buyers(&aggregates, n),
            top_net_sellers: top_net_sellers(&aggregates, n),
            top_day_traders: top_day_traders(&aggregates, n),
            aggregates,
            records,
        }
    }
}

impl Default for ReportAnalyzer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchflow_core::Error;

    const SAMPLE: &str = "\
報表名稱,證券分點日報\n\
日期,2024/05/17\n\
序,券商,價格,買進股數,賣出股數,,序,券商,價格,買進股數,賣出股數\n\
1,1020 合庫,25.50,3000,0,,2,9600 富邦,25.55,0,2000\n\
3,1020 合庫,25.60,0,1000,,4,9601 富邦嘉義,25.45,500,500\n";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn test_end_to_end() {
        let analyzer = ReportAnalyzer::default();
        let analysis = analyzer.analyze_report(SAMPLE, date()).unwrap();

        assert_eq!(analysis.records.len(), 4);
        assert_eq!(analysis.broker_count(), 3);
        assert_eq!(analysis.summary.len(), 3);

        let top_buyer = &analysis.top_net_buyers[0];
        assert_eq!(top_buyer.broker, "1020 合庫");
        assert!((top_buyer.net_buy_lots - 2.0).abs() < 1e-10);

        let top_seller = &analysis.top_net_sellers[0];
        assert_eq!(top_seller.broker, "9600 富邦");
        assert!((top_seller.net_sell_lots - 2.0).abs() < 1e-10);

        let top_trader = &analysis.top_day_traders[0];
        assert_eq!(top_trader.broker, "1020 合庫");
        assert!((top_trader.day_trade_lots - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_raw_parse_failure_is_error() {
        let analyzer = ReportAnalyzer::default();
        let result = analyzer.analyze_report("", date());
        assert!(matches!(result, Err(Error::Report(_))));
    }

    #[test]
    fn test_empty_data_region_is_success_with_zero_brokers() {
        let content = "a\nb\n序,券商,價格,買進股數,賣出股數\n";
        let analyzer = ReportAnalyzer::default();
        let analysis = analyzer.analyze_report(content, date()).unwrap();
        assert!(analysis.is_empty());
        assert_eq!(analysis.broker_count(), 0);
        assert!(analysis.top_net_buyers.is_empty());
        assert!(analysis.top_net_sellers.is_empty());
        assert!(analysis.top_day_traders.is_empty());
    }

    #[test]
    fn test_top_n_from_config() {
        let mut config = Config::default();
        config.ranking.top_n = 1;
        let analyzer = ReportAnalyzer::new(config);
        let analysis = analyzer.analyze_report(SAMPLE, date()).unwrap();
        assert_eq!(analysis.top_net_buyers.len(), 1);
        assert_eq!(analysis.top_day_traders.len(), 1);
    }

    #[test]
    fn test_recomputation_is_identical() {
        let analyzer = ReportAnalyzer::default();
        let first = analyzer.analyze_report(SAMPLE, date()).unwrap();
        let second = analyzer.analyze_report(SAMPLE, date()).unwrap();
        assert_eq!(first.aggregates, second.aggregates);
        assert_eq!(first.top_net_buyers, second.top_net_buyers);
    }

    #[test]
    fn test_analysis_serializes() {
        let analyzer = ReportAnalyzer::default();
        let analysis = analyzer.analyze_report(SAMPLE, date()).unwrap();
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("top_net_buyers"));
    }
}
