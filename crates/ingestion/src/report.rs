//! Raw report parsing.
//!
//! Splits a decoded daily broker report (CSV text) into a header row and a
//! data region. Byte decoding is the caller's concern; this module takes
//! already-decoded text.

use branchflow_core::{Error, RawTable, ReportLayout, Result};

/// Parse decoded report text into a raw table.
///
/// The exchange report carries preamble lines above the column labels; the
/// layout says which row holds the labels and where the data region starts.
/// Input with too few rows to contain the header is a [`Error::Report`],
/// which callers should surface differently from a well-formed report whose
/// data region happens to be empty.
pub fn parse_report(content: &str, layout: &ReportLayout) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            tracing::warn!(error = %e, "failed to decode report row");
            Error::report(format!("undecodable report row: {e}"))
        })?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    if rows.len() <= layout.header_row {
        tracing::warn!(
            rows = rows.len(),
            header_row = layout.header_row,
            "report too short to contain a header row"
        );
        return Err(Error::report(format!(
            "report has {} rows, header expected at row {}",
            rows.len(),
            layout.header_row
        )));
    }

    let header = rows[layout.header_row].clone();
    let data = if layout.data_start_row < rows.len() {
        rows.split_off(layout.data_start_row)
    } else {
        Vec::new()
    };

    tracing::debug!(
        columns = header.len(),
        data_rows = data.len(),
        "parsed raw report"
    );

    Ok(RawTable { header, rows: data })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
報表名稱,證券分點日報\n\
日期,2024/05/17\n\
序,券商,價格,買進股數,賣出股數,,序,券商,價格,買進股數,賣出股數\n\
1,1020 合庫,25.50,3000,0,,2,9600 富邦,25.55,0,2000\n\
3,1021 合庫台中,25.60,1000,1000,,4,9601 富邦嘉義,25.45,500,0\n";

    #[test]
    fn test_header_and_data_split() {
        let table = parse_report(SAMPLE, &ReportLayout::default()).unwrap();
        assert_eq!(table.header[1], "券商");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], "1020 合庫");
        assert_eq!(table.rows[1][7], "9601 富邦嘉義");
    }

    #[test]
    fn test_too_short_report_is_error() {
        let result = parse_report("只有一行\n", &ReportLayout::default());
        assert!(matches!(result, Err(Error::Report(_))));
    }

    #[test]
    fn test_empty_input_is_error() {
        let result = parse_report("", &ReportLayout::default());
        assert!(matches!(result, Err(Error::Report(_))));
    }

    #[test]
    fn test_header_without_data_is_ok_empty() {
        let content = "a\nb\n序,券商,價格,買進股數,賣出股數\n";
        let table = parse_report(content, &ReportLayout::default()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.header.len(), 5);
    }

    #[test]
    fn test_custom_layout() {
        let content = "券商,價格\nA,1.0\nB,2.0\n";
        let layout = ReportLayout {
            header_row: 0,
            data_start_row: 1,
        };
        let table = parse_report(content, &layout).unwrap();
        assert_eq!(table.header[0], "券商");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_flexible_row_widths() {
        let content = "a\nb\nh1,h2,h3\nshort\n1,2,3,4,5\n";
        let table = parse_report(content, &ReportLayout::default()).unwrap();
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 5);
    }
}
