//! Daily GFIM trading report naming and the fixed worksheet layout.
//!
//! Reports are published one file per trading day as
//! `TRADING REPORT FOR GFIM-<ddmmyyyy>.xlsx`. Inside each file the bond table
//! lives on a single worksheet whose name carries a trailing space. Columns are
//! bound by position because the header rows are not reliable.

use crate::domain::error::GfimError;
use chrono::NaiveDate;

/// Text preceding the `ddmmyyyy` segment in every report file name.
pub const FILE_NAME_MARKER: &str = "TRADING REPORT FOR GFIM-";

pub const FILE_EXTENSION: &str = "xlsx";

/// Worksheet holding the notes and bonds table. The trailing space is part of
/// the name; a sheet without it is a different sheet.
pub const SHEET_NAME: &str = "NEW GOG NOTES AND BONDS ";

/// Zero-based worksheet row of the first data row. Rows 1-3 are header.
pub const FIRST_DATA_ROW: u32 = 3;

/// Zero-based column positions (D, F, G, H, I).
pub const ISIN_COLUMN: u32 = 3;
pub const CLOSING_YIELD_COLUMN: u32 = 5;
pub const CLOSING_PRICE_COLUMN: u32 = 6;
pub const VOLUME_COLUMN: u32 = 7;
pub const NUMBER_TRADED_COLUMN: u32 = 8;

const FILE_DATE_FORMAT: &str = "%d%m%Y";
const ROW_DATE_FORMAT: &str = "%m/%d/%Y";

/// File name of the report published for `date`.
pub fn file_name_for(date: NaiveDate) -> String {
    format!(
        "{}{}.{}",
        FILE_NAME_MARKER,
        date.format(FILE_DATE_FORMAT),
        FILE_EXTENSION
    )
}

/// Recovers the trading date from a report file name.
///
/// The eight characters after [`FILE_NAME_MARKER`] must be digits forming a
/// valid `ddmmyyyy` date. Anything after them (normally `.xlsx`) is ignored.
pub fn date_from_file_name(file_name: &str) -> Result<NaiveDate, GfimError> {
    let invalid = |reason: &str| GfimError::ReportFileName {
        file: file_name.to_string(),
        reason: reason.to_string(),
    };

    let (_, tail) = file_name
        .split_once(FILE_NAME_MARKER)
        .ok_or_else(|| invalid("missing report marker"))?;

    let digits = tail
        .get(..8)
        .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| invalid("expected 8 digits (ddmmyyyy) after marker"))?;

    NaiveDate::parse_from_str(digits, FILE_DATE_FORMAT)
        .map_err(|e| invalid(&format!("invalid date {digits}: {e}")))
}

/// `mm/dd/yyyy`, the form written into the `Date` column.
pub fn format_row_date(date: NaiveDate) -> String {
    date.format(ROW_DATE_FORMAT).to_string()
}
