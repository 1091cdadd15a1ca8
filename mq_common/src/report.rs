//! Sorted, column-aligned quote table.
//!
//! The renderer sorts records by symbol with a stable sort, so duplicate symbols keep
//! the order in which their fetches completed, and lays out three columns the way a
//! tab writer with a padding of two would: every cell is padded to the widest cell of
//! its column plus two spaces. Widths are measured on the visible text, so ANSI
//! color sequences do not skew alignment.
use std::io::Write;

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

use crate::quote::QuoteRecord;
use crate::result::Result;

const HEADER: [&str; 3] = ["Symbol", "Price ($)", "Change today (%)"];
const SEPARATOR: [&str; 3] = ["------", "---------", "----------------"];
const PADDING: usize = 2;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Whether the change column is styled with ANSI colors.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    ValueEnum,
    Display,
    EnumString,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorMode {
    /// Green for non-negative changes, red for negative ones.
    #[default]
    Always,
    /// Plain text.
    Never,
}

struct Cell {
    text: String,
    color: Option<&'static str>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            color: None,
        }
    }
}

/// Sorts records by symbol, keeping the relative order of equal symbols.
pub fn sort_records(records: &mut [QuoteRecord]) {
    records.sort_by(|a, b| a.symbol.cmp(&b.symbol));
}

/// Renders quote tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer {
    color: ColorMode,
}

impl ReportRenderer {
    /// Creates a renderer with the given color mode.
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Writes the table framed by one blank line above and one below.
    pub fn write_report<W: Write>(&self, records: Vec<QuoteRecord>, out: &mut W) -> Result<()> {
        writeln!(out)?;
        self.render(records, out)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Sorts `records` and writes the header, separator and one row per record.
    pub fn render<W: Write>(&self, mut records: Vec<QuoteRecord>, out: &mut W) -> Result<()> {
        sort_records(&mut records);

        let mut rows: Vec<[Cell; 3]> = Vec::with_capacity(records.len() + 2);
        rows.push(HEADER.map(Cell::plain));
        rows.push(SEPARATOR.map(Cell::plain));
        rows.extend(records.iter().map(|r| self.row(r)));

        let mut widths = [0usize; 3];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        for row in &rows {
            let mut line = String::new();
            for (width, cell) in widths.iter().zip(row.iter()) {
                let pad = width + PADDING - cell.text.chars().count();
                match cell.color {
                    Some(color) => {
                        line.push_str(color);
                        line.push_str(&cell.text);
                        line.push_str(RESET);
                    }
                    None => line.push_str(&cell.text),
                }
                line.extend(std::iter::repeat_n(' ', pad));
            }
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn row(&self, record: &QuoteRecord) -> [Cell; 3] {
        let (text, color) = if record.is_non_negative() {
            (format!("+{:.2}%", record.change_percent), GREEN)
        } else {
            (format!("{:.2}%", record.change_percent), RED)
        };
        let change = Cell {
            text,
            color: match self.color {
                ColorMode::Always => Some(color),
                ColorMode::Never => None,
            },
        };
        [
            Cell::plain(record.symbol.as_str()),
            Cell::plain(format!("{:.2}", record.price)),
            change,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::FetchStatus;

    fn record(symbol: &str, price: f64, change: f64) -> QuoteRecord {
        QuoteRecord::new(symbol, price, change, FetchStatus::Ok)
    }

    fn render(color: ColorMode, records: Vec<QuoteRecord>) -> Vec<String> {
        let mut out = Vec::new();
        ReportRenderer::new(color).render(records, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn plain_table_layout() {
        let lines = render(
            ColorMode::Never,
            vec![record("MSFT", 410.5, -1.234), record("AAPL", 187.0, 0.5)],
        );
        assert_eq!(
            lines,
            vec![
                "Symbol  Price ($)  Change today (%)  ",
                "------  ---------  ----------------  ",
                "AAPL    187.00     +0.50%            ",
                "MSFT    410.50     -1.23%            ",
            ]
        );
    }

    #[test]
    fn wide_symbol_widens_column() {
        let lines = render(ColorMode::Never, vec![record("BTCUSD=X", 65000.0, 2.0)]);
        assert_eq!(lines[0], "Symbol    Price ($)  Change today (%)  ");
        assert_eq!(lines[2], "BTCUSD=X  65000.00   +2.00%            ");
    }

    #[test]
    fn colors_wrap_change_only() {
        let lines = render(
            ColorMode::Always,
            vec![record("A", 1.0, 0.0), record("B", 1.0, -0.5)],
        );
        assert_eq!(lines[2], "A       1.00       \x1b[32m+0.00%\x1b[0m            ");
        assert_eq!(lines[3], "B       1.00       \x1b[31m-0.50%\x1b[0m            ");
    }

    #[test]
    fn stable_sort_keeps_duplicate_order() {
        let mut records = vec![
            record("IBM", 2.0, 0.0),
            record("AAPL", 1.0, 0.0),
            record("IBM", 1.0, 0.0),
        ];
        sort_records(&mut records);
        let order: Vec<(&str, f64)> = records.iter().map(|r| (r.symbol.as_str(), r.price)).collect();
        assert_eq!(order, vec![("AAPL", 1.0), ("IBM", 2.0), ("IBM", 1.0)]);
    }

    #[test]
    fn report_is_framed_by_blank_lines() {
        let mut out = Vec::new();
        ReportRenderer::new(ColorMode::Never)
            .write_report(vec![record("IBM", 1.0, 1.0)], &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nSymbol"));
        assert!(text.ends_with("  \n\n"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn color_mode_parses_case_insensitively() {
        assert_eq!("NEVER".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert_eq!(ColorMode::Always.to_string(), "always");
    }
}
