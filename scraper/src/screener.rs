//! Static definitions for the three screener feeds and the header-driven
//! column resolution used when mapping their exports.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ScrapeError;

/// Everything the pipeline needs to know about one screener feed. The
/// site's pages differ only in URL, export control and column set, so one
/// parameterized pipeline covers all three.
pub struct ScreenerDef {
    pub screener_type: &'static str,
    pub screener: &'static str,
    pub page_url: &'static str,
    pub export_file: &'static str,
    /// Known CSS selector for the export control, when the page has one.
    /// The exporter falls back to scanning clickable elements either way.
    pub export_selector: Option<&'static str>,
    /// Expected header names, in the order the mapped fields are handed to
    /// the repository.
    pub columns: &'static [&'static str],
}

pub static ALERTS: ScreenerDef = ScreenerDef {
    screener_type: "Intraday_Alerts",
    screener: "Intraday_Alerts",
    page_url: "https://intradayscreener.com/intraday-stock-alerts",
    export_file: "intraday_stock_alerts.csv",
    export_selector: None,
    columns: &["Symbol", "Trade Type", "LTP", "Today's Range", "Rank"],
};

pub static ACCURACY: ScreenerDef = ScreenerDef {
    screener_type: "Intraday_Accuracy",
    screener: "Intraday_Accuracy",
    page_url: "https://intradayscreener.com/scan/1111/Intraday_100%25_Accuracy",
    export_file: "Intraday 100% Accuracy.csv",
    export_selector: Some("div.screener-actions a.csv-download"),
    columns: &["Symbol", "Trade Type", "LTP", "Today's Range", "Rank"],
};

pub static MOMENTUM: ScreenerDef = ScreenerDef {
    screener_type: "Momentum",
    screener: "Momentum",
    page_url: "https://intradayscreener.com/intraday-momentum",
    export_file: "intraday_momentum_stocks.csv",
    export_selector: None,
    columns: &[
        "Symbol",
        "Trade Type",
        "LTP",
        "Volume Change",
        "Volume Ratio",
        "Momentum Rank",
        "52 Week High",
        "52 Week Low",
        "21 EMA %",
        "VWAP %",
        "RSI",
        "ADX",
    ],
};

/// Positions of a screener's expected columns within one concrete export
/// header. Mapping is by name first, then by resolved position, so a
/// reordered or truncated export fails loudly instead of misaligning.
#[derive(Debug)]
pub struct HeaderIndex {
    positions: Vec<usize>,
}

impl HeaderIndex {
    /// Pull a row's fields out in schema order. `row_no` is 1-based and
    /// only used for error context.
    pub fn extract(&self, row: &[String], row_no: usize) -> Result<Vec<String>, ScrapeError> {
        self.positions
            .iter()
            .map(|&pos| {
                row.get(pos).cloned().ok_or(ScrapeError::ShortRow {
                    row: row_no,
                    got: row.len(),
                    want: pos + 1,
                })
            })
            .collect()
    }
}

pub fn resolve_header(def: &ScreenerDef, header: &[String]) -> Result<HeaderIndex, ScrapeError> {
    let mut positions = Vec::with_capacity(def.columns.len());
    for column in def.columns {
        let pos = header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
            .ok_or_else(|| ScrapeError::SchemaMismatch {
                column: column.to_string(),
            })?;
        positions.push(pos);
    }
    Ok(HeaderIndex { positions })
}

static SYMBOL_STRIP: OnceLock<Regex> = OnceLock::new();

/// Drop every character that is not a word character, whitespace or a dot.
/// Applied to the momentum volume-ratio field, which the site decorates
/// with arrows and multiplication signs.
pub fn strip_symbols(value: &str) -> String {
    let re = SYMBOL_STRIP.get_or_init(|| Regex::new(r"[^\w.\s]").expect("static pattern"));
    re.replace_all(value, "").into_owned()
}
