//! Configuration structures for the branchflow engine.

use serde::{Deserialize, Serialize};

/// Main configuration for report analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Report layout configuration.
    pub layout: ReportLayout,
    /// Ranking configuration.
    pub ranking: RankingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: ReportLayout::default(),
            ranking: RankingConfig::default(),
        }
    }
}

/// Layout of the raw exchange report.
///
/// Only the vertical split is configurable; the left/right block column
/// offsets are fixed properties of the report format and live in the
/// normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLayout {
    /// Zero-based index of the row holding column labels.
    pub header_row: usize,
    /// Zero-based index of the first data row.
    pub data_start_row: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            header_row: 2,
            data_start_row: 3,
        }
    }
}

/// Ranking view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Number of brokers per leaderboard.
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_n: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.layout.header_row, 2);
        assert_eq!(config.layout.data_start_row, 3);
        assert_eq!(config.ranking.top_n, 20);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ranking.top_n, config.ranking.top_n);
    }
}
