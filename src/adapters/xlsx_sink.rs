//! Excel workbook sink for the combined result.

use crate::domain::error::GfimError;
use crate::domain::row::{CellValue, CombinedResult, COLUMN_NAMES};
use crate::ports::result_sink::ResultSink;
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, FormatBorder, Workbook, XlsxError};
use std::path::Path;

pub const SHEET_NAME: &str = "Sheet1";

/// Writes a single-sheet workbook: one bold header row, then one row per
/// extracted row.
///
/// The document creation timestamp is pinned to `created` so the same
/// request over the same inputs produces the same bytes.
#[derive(Debug, Clone, Copy)]
pub struct XlsxSink {
    created: NaiveDate,
}

impl XlsxSink {
    pub fn new(created: NaiveDate) -> Self {
        Self { created }
    }

    fn build(&self, result: &CombinedResult) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();

        let created = creation_datetime(self.created)?;
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

        let header = Format::new().set_bold().set_border(FormatBorder::Thin);

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(SHEET_NAME)?;

            for (col, name) in COLUMN_NAMES.iter().enumerate() {
                sheet.write_string_with_format(0, col as u16, *name, &header)?;
            }

            for (i, row) in result.rows().iter().enumerate() {
                let r = i as u32 + 1;
                for (col, cell) in row.cells().iter().enumerate() {
                    let col = col as u16;
                    match cell {
                        CellValue::Number(n) => {
                            sheet.write_number(r, col, *n)?;
                        }
                        CellValue::Text(s) => {
                            sheet.write_string(r, col, s)?;
                        }
                        CellValue::Empty => {}
                    }
                }
            }
        }

        Ok(workbook)
    }
}

/// Excel stores dates from 1900 to 9999; anything outside maps to 1900-01-01.
fn creation_datetime(date: NaiveDate) -> Result<ExcelDateTime, XlsxError> {
    match u16::try_from(date.year()) {
        Ok(year @ 1900..=9999) => {
            ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)
        }
        _ => ExcelDateTime::from_ymd(1900, 1, 1),
    }
}

impl ResultSink for XlsxSink {
    fn write(&self, result: &CombinedResult, output_path: &Path) -> Result<(), GfimError> {
        let output_err = |e: XlsxError| GfimError::Output {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        };
        let mut workbook = self.build(result).map_err(output_err)?;
        workbook.save(output_path).map_err(output_err)
    }
}
