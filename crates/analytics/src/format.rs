//! Presentation formatting helpers.
//!
//! Everything here is render-time only: broker identifiers and aggregate
//! values stay untouched through normalization and aggregation, and get
//! cleaned or rounded just before display/export.

/// Round to one decimal place, the report's presentation precision.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Cosmetically clean a broker identifier for display.
///
/// Keeps CJK ideographs, CJK punctuation, fullwidth forms, and `(`/`)`/`-`;
/// everything else (branch codes, stray ASCII noise) is stripped.
pub fn clean_broker_name(name: &str) -> String {
    name.chars()
        .filter(|&ch| {
            ('\u{4e00}'..='\u{9fff}').contains(&ch)
                || ('\u{3000}'..='\u{303f}').contains(&ch)
                || ('\u{ff00}'..='\u{ffef}').contains(&ch)
                || matches!(ch, '(' | ')' | '-')
        })
        .collect()
}

/// Re-parse a rendered numeric cell back into a value.
///
/// Tolerates thousands separators, accountant-style parenthesized
/// negatives, and "N張(px)" lot labels (converted back to shares).
/// Anything unrecognizable is 0.
pub fn parse_formatted_number(text: &str) -> f64 {
    let trimmed = text.trim().replace(',', "");
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(inner) = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return inner.parse::<f64>().map_or(0.0, |v| -v);
    }

    if trimmed.contains('張') && trimmed.contains('(') && trimmed.contains(')') {
        if let Some(lots) = trimmed.split('張').next() {
            return lots.parse::<f64>().map_or(0.0, |v| v * 1000.0);
        }
    }

    trimmed.parse::<f64>().unwrap_or(0.0)
}

/// Format a volume as an integer label; 0 and unparsable both render "0".
pub fn volume_label(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Build the (price, volume) label pair for chart annotations.
///
/// The price label is "(px.x)", or empty when there is no meaningful price.
pub fn volume_price_labels(volume: f64, price: f64) -> (String, String) {
    let volume_text = volume_label(volume);
    let price_text = if !price.is_finite() || price <= 0.0 {
        String::new()
    } else {
        format!("({price:.1})")
    };
    (price_text, volume_text)
}
