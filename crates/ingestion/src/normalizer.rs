//! Raw table normalization.
//!
//! The exchange report packs two independent broker observations into each
//! row (a left and a right broker/price/buy/sell quadruple). The normalizer
//! flattens both blocks into one long-form record sequence and coerces the
//! numeric fields.

use branchflow_core::{RawTable, TradeRecord};

/// Column offsets of the left quadruple. Fixed by the report format.
const LEFT_BLOCK: [usize; 4] = [1, 2, 3, 4];
/// Column offsets of the right quadruple.
const RIGHT_BLOCK: [usize; 4] = [7, 8, 9, 10];

/// Flatten a raw two-block table into unified trade records.
///
/// Output order is all left-block records in row order, then all right-block
/// records in row order. Records whose price fails to parse are dropped as a
/// unit; volume parse failures zero-fill instead. The asymmetry is
/// deliberate: a zero volume is the report's way of saying "no trade on this
/// side", while a broken price invalidates the whole observation. Records
/// with zero volume on both sides are retained.
pub fn normalize(table: &RawTable) -> Vec<TradeRecord> {
    let mut records = Vec::with_capacity(table.rows.len() * 2);
    let mut dropped = 0usize;

    for block in [&LEFT_BLOCK, &RIGHT_BLOCK] {
        for row in &table.rows {
            match extract_record(row, block) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        tracing::debug!(
            dropped,
            retained = records.len(),
            "dropped quadruples without a parsable price"
        );
    }

    records
}

/// Extract one quadruple from a row, or None if its price is unusable.
fn extract_record(row: &[String], block: &[usize; 4]) -> Option<TradeRecord> {
    let broker = row.get(block[0])?;
    let price = parse_price(row.get(block[1])?)?;
    let buy_shares = row.get(block[2]).map_or(0, |v| parse_shares(v));
    let sell_shares = row.get(block[3]).map_or(0, |v| parse_shares(v));

    Some(TradeRecord {
        // Verbatim, noise characters included; cleaned only at render time.
        broker: broker.clone(),
        price,
        buy_shares,
        sell_shares,
    })
}

/// Parse a price cell. Thousands separators are tolerated; anything that
/// does not yield a finite number is unusable.
fn parse_price(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Parse a volume cell, zero-filling anything unparsable or negative.
///
/// Integer text is the common case; float text (e.g. "3000.0") truncates.
fn parse_shares(cell: &str) -> u64 {
    let cleaned = cell.trim().replace(',', "");
    if let Ok(shares) = cleaned.parse::<u64>() {
        return shares;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.trunc() as u64,
        _ => 0,
    }
}
