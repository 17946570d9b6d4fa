//! Date-range aggregation of daily reports.
//!
//! Walks the requested range one calendar day at a time, extracts matching
//! rows from each report that exists, and accumulates them in date order.
//! Missing files and missing worksheets are recorded and skipped; every other
//! failure aborts the run.

use crate::domain::calendar::{days_inclusive, is_weekend};
use crate::domain::error::GfimError;
use crate::domain::extract::Extraction;
use crate::domain::report::file_name_for;
use crate::domain::request::RequestParameters;
use crate::domain::row::CombinedResult;
use crate::ports::report_source::ReportSource;
use crate::ports::result_sink::ResultSink;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    Extracted { rows: usize },
    SheetNotFound,
    Missing { weekend: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub outcome: DayOutcome,
}

/// Per-day record of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub days: Vec<DayRecord>,
}

impl RunSummary {
    pub fn outcome_for(&self, date: NaiveDate) -> Option<DayOutcome> {
        self.days.iter().find(|d| d.date == date).map(|d| d.outcome)
    }

    pub fn files_read(&self) -> usize {
        self.days
            .iter()
            .filter(|d| !matches!(d.outcome, DayOutcome::Missing { .. }))
            .count()
    }

    pub fn missing(&self) -> usize {
        self.days.len() - self.files_read()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub combined: CombinedResult,
    pub summary: RunSummary,
}

pub fn aggregate(
    source: &dyn ReportSource,
    request: &RequestParameters,
) -> Result<Aggregation, GfimError> {
    if request.is_reversed() {
        tracing::warn!(
            start = %request.start_date,
            end = %request.end_date,
            "start date is after end date, no days to process"
        );
    }

    let filter = request.filter();
    let mut combined = CombinedResult::new();
    let mut summary = RunSummary::default();

    for date in days_inclusive(request.start_date, request.end_date) {
        let outcome = match source.locate(date)? {
            Some(path) => match source.extract(&path, &filter)? {
                Extraction::Rows(rows) => {
                    tracing::info!(file = %path.display(), rows = rows.len(), "extracted report");
                    let count = rows.len();
                    combined.append(rows);
                    DayOutcome::Extracted { rows: count }
                }
                Extraction::SheetNotFound { .. } => DayOutcome::SheetNotFound,
            },
            None => {
                let weekend = is_weekend(date);
                if weekend {
                    tracing::warn!(%date, file = %file_name_for(date), "file not found, it's a weekend");
                } else {
                    tracing::warn!(%date, file = %file_name_for(date), "file not found");
                }
                DayOutcome::Missing { weekend }
            }
        };
        summary.days.push(DayRecord { date, outcome });
    }

    Ok(Aggregation { combined, summary })
}

/// Result of a full fetch: where the output went and what each day did.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub output_path: PathBuf,
    pub rows: usize,
    pub summary: RunSummary,
}

/// Aggregates `request` and persists the combined result at `output_path`,
/// creating its directory when needed. An empty result is still written.
pub fn run_fetch(
    source: &dyn ReportSource,
    sink: &dyn ResultSink,
    request: &RequestParameters,
    output_path: &Path,
) -> Result<FetchOutcome, GfimError> {
    tracing::info!(
        start = %request.start_date,
        end = %request.end_date,
        isins = request.isins.len(),
        "aggregating reports"
    );

    let Aggregation { combined, summary } = aggregate(source, request)?;

    if let Some(dir) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| GfimError::Output {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    sink.write(&combined, output_path)?;

    tracing::info!(
        output = %output_path.display(),
        rows = combined.len(),
        files = summary.files_read(),
        missing = summary.missing(),
        "wrote combined result"
    );

    Ok(FetchOutcome {
        output_path: output_path.to_path_buf(),
        rows: combined.len(),
        summary,
    })
}

/// Availability of one day's report, without opening it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub file_name: String,
    pub present: bool,
    pub weekend: bool,
}

pub fn scan(
    source: &dyn ReportSource,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DayAvailability>, GfimError> {
    days_inclusive(start, end)
        .map(|date| {
            Ok(DayAvailability {
                date,
                file_name: file_name_for(date),
                present: source.locate(date)?.is_some(),
                weekend: is_weekend(date),
            })
        })
        .collect()
}
