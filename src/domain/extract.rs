//! Row extraction from one daily report worksheet.
//!
//! The worksheet is read through [`SheetCells`], a positional view keyed by
//! absolute zero-based coordinates, so the selection logic here does not
//! depend on the workbook library.

use crate::domain::report::{
    format_row_date, CLOSING_PRICE_COLUMN, CLOSING_YIELD_COLUMN, FIRST_DATA_ROW, ISIN_COLUMN,
    NUMBER_TRADED_COLUMN, VOLUME_COLUMN,
};
use crate::domain::request::IsinFilter;
use crate::domain::row::{CellValue, ExtractedRow};
use chrono::NaiveDate;

/// Outcome of extracting one report file.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Rows(Vec<ExtractedRow>),
    /// The workbook opened but has no worksheet with the expected name.
    SheetNotFound { sheet: String },
}

impl Extraction {
    pub fn into_rows(self) -> Vec<ExtractedRow> {
        match self {
            Extraction::Rows(rows) => rows,
            Extraction::SheetNotFound { .. } => Vec::new(),
        }
    }
}

/// Absolute-position access to a worksheet.
pub trait SheetCells {
    /// Last used row, or `None` for an empty sheet.
    fn last_row(&self) -> Option<u32>;

    /// Value at (`row`, `col`); cells outside the used area are empty.
    fn cell(&self, row: u32, col: u32) -> CellValue;
}

/// Selects the five report columns from every data row whose ISIN is
/// requested, stamping each with `report_date`.
pub fn extract_rows(
    sheet: &dyn SheetCells,
    report_date: NaiveDate,
    filter: &IsinFilter,
) -> Vec<ExtractedRow> {
    let Some(last_row) = sheet.last_row() else {
        return Vec::new();
    };
    let date = format_row_date(report_date);

    (FIRST_DATA_ROW..=last_row)
        .filter_map(|row| {
            let isin = match sheet.cell(row, ISIN_COLUMN) {
                CellValue::Text(s) if filter.contains(&s) => s,
                _ => return None,
            };
            Some(ExtractedRow {
                isin,
                closing_yield: sheet.cell(row, CLOSING_YIELD_COLUMN),
                closing_price: sheet.cell(row, CLOSING_PRICE_COLUMN),
                volume: sheet.cell(row, VOLUME_COLUMN),
                number_traded: sheet.cell(row, NUMBER_TRADED_COLUMN),
                date: date.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Grid {
        cells: HashMap<(u32, u32), CellValue>,
    }

    impl Grid {
        fn set(&mut self, row: u32, col: u32, value: CellValue) {
            self.cells.insert((row, col), value);
        }

        fn data_row(&mut self, row: u32, isin: &str, yld: f64, price: f64) {
            self.set(row, 0, CellValue::Number(f64::from(row)));
            self.set(row, ISIN_COLUMN, CellValue::Text(isin.into()));
            self.set(row, 4, CellValue::Text("ignored".into()));
            self.set(row, CLOSING_YIELD_COLUMN, CellValue::Number(yld));
            self.set(row, CLOSING_PRICE_COLUMN, CellValue::Number(price));
            self.set(row, VOLUME_COLUMN, CellValue::Number(500_000.0));
            self.set(row, NUMBER_TRADED_COLUMN, CellValue::Number(2.0));
        }
    }

    impl SheetCells for Grid {
        fn last_row(&self) -> Option<u32> {
            self.cells.keys().map(|(r, _)| *r).max()
        }

        fn cell(&self, row: u32, col: u32) -> CellValue {
            self.cells.get(&(row, col)).cloned().unwrap_or_default()
        }
    }

    fn filter(isins: &[&str]) -> IsinFilter {
        IsinFilter::new(isins.iter().map(|s| s.to_string()))
    }

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn selects_positional_columns_and_stamps_date() {
        let mut grid = Grid::default();
        grid.set(0, 0, CellValue::Text("GFIM DAILY REPORT".into()));
        grid.data_row(3, "GHGGOG072816", 27.5, 98.25);

        let rows = extract_rows(&grid, report_date(), &filter(&["GHGGOG072816"]));

        assert_eq!(
            rows,
            vec![ExtractedRow {
                isin: "GHGGOG072816".into(),
                closing_yield: CellValue::Number(27.5),
                closing_price: CellValue::Number(98.25),
                volume: CellValue::Number(500_000.0),
                number_traded: CellValue::Number(2.0),
                date: "03/15/2024".into(),
            }]
        );
    }

    #[test]
    fn header_rows_are_never_matched() {
        let mut grid = Grid::default();
        grid.set(2, ISIN_COLUMN, CellValue::Text("ISIN".into()));
        grid.data_row(3, "A", 1.0, 1.0);

        let rows = extract_rows(&grid, report_date(), &filter(&["ISIN", "A"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].isin, "A");
    }

    #[test]
    fn keeps_source_order_and_drops_unrequested() {
        let mut grid = Grid::default();
        grid.data_row(3, "B", 1.0, 1.0);
        grid.data_row(4, "X", 2.0, 2.0);
        grid.data_row(5, "A", 3.0, 3.0);
        grid.data_row(6, "B", 4.0, 4.0);

        let rows = extract_rows(&grid, report_date(), &filter(&["A", "B"]));
        let isins: Vec<_> = rows.iter().map(|r| r.isin.as_str()).collect();
        assert_eq!(isins, vec!["B", "A", "B"]);
    }

    #[test]
    fn numeric_isin_cell_does_not_match() {
        let mut grid = Grid::default();
        grid.set(3, ISIN_COLUMN, CellValue::Number(123.0));

        assert!(extract_rows(&grid, report_date(), &filter(&["123"])).is_empty());
    }

    #[test]
    fn missing_value_cells_are_empty() {
        let mut grid = Grid::default();
        grid.set(3, ISIN_COLUMN, CellValue::Text("A".into()));
        grid.set(3, CLOSING_YIELD_COLUMN, CellValue::Text("-".into()));

        let rows = extract_rows(&grid, report_date(), &filter(&["A"]));
        assert_eq!(rows[0].closing_yield, CellValue::Text("-".into()));
        assert_eq!(rows[0].closing_price, CellValue::Empty);
        assert_eq!(rows[0].number_traded, CellValue::Empty);
    }

    #[test]
    fn empty_sheet_yields_no_rows() {
        let grid = Grid::default();
        assert!(extract_rows(&grid, report_date(), &filter(&["A"])).is_empty());
    }

    #[test]
    fn sheet_not_found_has_no_rows() {
        let extraction = Extraction::SheetNotFound {
            sheet: "NEW GOG NOTES AND BONDS ".into(),
        };
        assert!(extraction.into_rows().is_empty());
    }
}
