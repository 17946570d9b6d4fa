#![allow(dead_code)]

use calamine::{open_workbook, Reader, Xlsx};
use chrono::NaiveDate;
use gfim_history::domain::report::{file_name_for, SHEET_NAME};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// One bond line of a daily report.
#[derive(Debug, Clone)]
pub struct ReportLine {
    pub isin: &'static str,
    pub closing_yield: f64,
    pub closing_price: f64,
    pub volume: f64,
    pub number_traded: f64,
}

pub fn line(isin: &'static str, closing_yield: f64, closing_price: f64) -> ReportLine {
    ReportLine {
        isin,
        closing_yield,
        closing_price,
        volume: 250_000.0,
        number_traded: 4.0,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Writes a report for `date` with the standard worksheet name.
pub fn write_report(dir: &Path, date: NaiveDate, lines: &[ReportLine]) -> PathBuf {
    write_report_with_sheet(dir, date, SHEET_NAME, lines)
}

/// Writes a report laid out like the published files: three title/header
/// rows, then one row per bond with the ISIN in column D and prices in F-I.
pub fn write_report_with_sheet(
    dir: &Path,
    date: NaiveDate,
    sheet_name: &str,
    lines: &[ReportLine],
) -> PathBuf {
    let path = dir.join(file_name_for(date));
    let mut workbook = Workbook::new();

    let cover = workbook.add_worksheet();
    cover.set_name("SUMMARY").unwrap();
    cover.write_string(0, 0, "GFIM DAILY SUMMARY").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).unwrap();
    sheet.write_string(0, 0, "GHANA FIXED INCOME MARKET").unwrap();
    sheet
        .write_string(1, 0, format!("TRADING REPORT FOR {}", date.format("%d/%m/%Y")))
        .unwrap();
    let headers = [
        "NO.", "SECURITY", "MATURITY", "ISIN CODE", "OPENING YIELD", "CLOSING YIELD",
        "CLOSING PRICE", "VOLUME TRADED", "NO. OF TRADES",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(2, col as u16, *header).unwrap();
    }

    for (i, l) in lines.iter().enumerate() {
        let row = 3 + i as u32;
        sheet.write_number(row, 0, (i + 1) as f64).unwrap();
        sheet.write_string(row, 1, "GOG NOTE").unwrap();
        sheet.write_string(row, 2, "2027-07-28").unwrap();
        sheet.write_string(row, 3, l.isin).unwrap();
        sheet.write_number(row, 4, l.closing_yield + 0.5).unwrap();
        sheet.write_number(row, 5, l.closing_yield).unwrap();
        sheet.write_number(row, 6, l.closing_price).unwrap();
        sheet.write_number(row, 7, l.volume).unwrap();
        sheet.write_number(row, 8, l.number_traded).unwrap();
    }

    workbook.save(&path).unwrap();
    path
}

/// Reads the first worksheet of an output workbook as display strings,
/// header row included.
pub fn read_xlsx_rows(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let name = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&name).unwrap();
    range
        .rows()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub const HEADER: [&str; 6] = [
    "ISIN",
    "CLOSING YIELD",
    "END OF DAY CLOSING PRICE",
    "VOLUME",
    "NUMBER TRADED",
    "Date",
];
