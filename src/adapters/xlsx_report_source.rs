//! Report source reading daily `.xlsx` reports from a directory.

use crate::domain::error::GfimError;
use crate::domain::extract::{extract_rows, Extraction, SheetCells};
use crate::domain::report::{date_from_file_name, file_name_for, SHEET_NAME};
use crate::domain::request::IsinFilter;
use crate::domain::row::CellValue;
use crate::ports::report_source::ReportSource;
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct XlsxReportSource {
    input_dir: PathBuf,
}

impl XlsxReportSource {
    /// Fails when `input_dir` does not exist or is not a directory.
    pub fn new(input_dir: PathBuf) -> Result<Self, GfimError> {
        match std::fs::metadata(&input_dir) {
            Ok(meta) if meta.is_dir() => Ok(Self { input_dir }),
            Ok(_) => Err(GfimError::InputDir {
                path: input_dir.display().to_string(),
                reason: "not a directory".into(),
            }),
            Err(e) => Err(GfimError::InputDir {
                path: input_dir.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn report_path(&self, date: NaiveDate) -> PathBuf {
        self.input_dir.join(file_name_for(date))
    }
}

impl ReportSource for XlsxReportSource {
    fn locate(&self, date: NaiveDate) -> Result<Option<PathBuf>, GfimError> {
        let path = self.report_path(date);
        Ok(path.is_file().then_some(path))
    }

    fn extract(&self, path: &Path, filter: &IsinFilter) -> Result<Extraction, GfimError> {
        extract_report(path, filter)
    }
}

/// Reads one report file. Usable on any path, not only files under an input
/// directory.
pub fn extract_report(path: &Path, filter: &IsinFilter) -> Result<Extraction, GfimError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let report_date = date_from_file_name(&file_name)?;

    let workbook_err = |reason: String| GfimError::Workbook {
        file: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook::<Xlsx<_>, _>(path)
        .map_err(|e: XlsxError| workbook_err(e.to_string()))?;

    if !workbook.sheet_names().iter().any(|name| name == SHEET_NAME) {
        tracing::warn!(
            file = %path.display(),
            sheet = SHEET_NAME,
            "worksheet not found in file"
        );
        return Ok(Extraction::SheetNotFound {
            sheet: SHEET_NAME.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|e| workbook_err(e.to_string()))?;

    Ok(Extraction::Rows(extract_rows(
        &CalamineSheet(range),
        report_date,
        filter,
    )))
}

struct CalamineSheet(Range<Data>);

impl SheetCells for CalamineSheet {
    fn last_row(&self) -> Option<u32> {
        self.0.end().map(|(row, _)| row)
    }

    fn cell(&self, row: u32, col: u32) -> CellValue {
        self.0
            .get_value((row, col))
            .map(cell_value)
            .unwrap_or_default()
    }
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}
