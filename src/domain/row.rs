//! Extracted report rows and the combined result.

use std::fmt;

/// Output column headers, in output order.
pub const COLUMN_NAMES: [&str; 6] = [
    "ISIN",
    "CLOSING YIELD",
    "END OF DAY CLOSING PRICE",
    "VOLUME",
    "NUMBER TRADED",
    "Date",
];

/// A worksheet cell value, reduced to what the output needs to reproduce.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// One matched row of a daily report, renamed and date-stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRow {
    pub isin: String,
    pub closing_yield: CellValue,
    pub closing_price: CellValue,
    pub volume: CellValue,
    pub number_traded: CellValue,
    /// `mm/dd/yyyy`
    pub date: String,
}

impl ExtractedRow {
    /// Values in [`COLUMN_NAMES`] order.
    pub fn cells(&self) -> [CellValue; 6] {
        [
            CellValue::Text(self.isin.clone()),
            self.closing_yield.clone(),
            self.closing_price.clone(),
            self.volume.clone(),
            self.number_traded.clone(),
            CellValue::Text(self.date.clone()),
        ]
    }
}

/// Rows from every processed day, in ascending date order then source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedResult {
    rows: Vec<ExtractedRow>,
}

impl CombinedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one day's rows. Days must be appended in ascending order.
    pub fn append(&mut self, rows: Vec<ExtractedRow>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[ExtractedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
