//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_sink::{self, CsvSink};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::xlsx_report_source::{extract_report, XlsxReportSource};
use crate::adapters::xlsx_sink::XlsxSink;
use crate::domain::aggregate::{self, DayAvailability, FetchOutcome};
use crate::domain::error::GfimError;
use crate::domain::extract::Extraction;
use crate::domain::request::{parse_date, parse_isins, IsinFilter, RequestError, RequestParameters};
use crate::domain::settings::{build_settings, OutputFormat, Settings};
use crate::logging;
use crate::ports::result_sink::ResultSink;

#[derive(Parser, Debug)]
#[command(
    name = "gfim-history",
    about = "Historical GFIM bond prices and yields from daily trading reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate matching rows across a date range into one spreadsheet
    Fetch {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,
        /// Last day (inclusive), YYYY-MM-DD
        #[arg(long)]
        end: Option<String>,
        /// Comma-separated ISINs
        #[arg(long)]
        isins: Option<String>,
        /// JSON request: {"startDate", "endDate", "isins"}
        #[arg(long, conflicts_with_all = ["start", "end", "isins"])]
        request: Option<PathBuf>,
        #[command(flatten)]
        overrides: SettingsOverrides,
    },
    /// List which daily reports exist in a date range
    Scan {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        input_dir: Option<PathBuf>,
    },
    /// Print the matching rows of a single report as CSV
    Extract {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        isins: String,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct SettingsOverrides {
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Fetch {
            config,
            start,
            end,
            isins,
            request,
            overrides,
        } => run_fetch(
            config.as_ref(),
            start.as_deref(),
            end.as_deref(),
            isins.as_deref(),
            request.as_ref(),
            &overrides,
        ),
        Command::Scan {
            config,
            start,
            end,
            input_dir,
        } => run_scan(config.as_ref(), &start, &end, input_dir),
        Command::Extract { file, isins } => run_extract(&file, &isins),
    }
}

/// Reads settings from `path`, or defaults when no config file is given.
pub fn load_settings(path: Option<&PathBuf>) -> Result<Settings, GfimError> {
    let adapter = match path {
        Some(path) => FileConfigAdapter::from_file(path).map_err(|e| GfimError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?,
        None => FileConfigAdapter::default(),
    };
    build_settings(&adapter)
}

pub fn apply_overrides(mut settings: Settings, overrides: &SettingsOverrides) -> Settings {
    if let Some(dir) = &overrides.input_dir {
        settings.input_dir = dir.clone();
    }
    if let Some(dir) = &overrides.output_dir {
        settings.output_dir = dir.clone();
    }
    if let Some(format) = overrides.format {
        settings.format = format;
    }
    settings
}

/// Builds the request from either a JSON document or the three flags.
pub fn resolve_request(
    start: Option<&str>,
    end: Option<&str>,
    isins: Option<&str>,
    request_path: Option<&PathBuf>,
) -> Result<RequestParameters, GfimError> {
    if let Some(path) = request_path {
        let content = fs::read_to_string(path)?;
        return Ok(RequestParameters::from_json(&content)?);
    }
    let start = start.ok_or(RequestError::Missing("--start"))?;
    let end = end.ok_or(RequestError::Missing("--end"))?;
    let isins = isins.ok_or(RequestError::Missing("--isins"))?;
    Ok(RequestParameters::from_args(start, end, isins)?)
}

pub fn sink_for(settings: &Settings, request: &RequestParameters) -> Box<dyn ResultSink> {
    match settings.format {
        OutputFormat::Xlsx => Box::new(XlsxSink::new(request.start_date)),
        OutputFormat::Csv => Box::new(CsvSink),
    }
}

/// Aggregates `request` over the reports in `settings.input_dir` and writes
/// the combined result to `settings.output_path()`.
pub fn fetch(settings: &Settings, request: &RequestParameters) -> Result<FetchOutcome, GfimError> {
    let source = XlsxReportSource::new(settings.input_dir.clone())?;
    let sink = sink_for(settings, request);
    aggregate::run_fetch(&source, sink.as_ref(), request, &settings.output_path())
}

fn run_fetch(
    config_path: Option<&PathBuf>,
    start: Option<&str>,
    end: Option<&str>,
    isins: Option<&str>,
    request_path: Option<&PathBuf>,
    overrides: &SettingsOverrides,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => apply_overrides(s, overrides),
        Err(e) => return report(&e),
    };
    logging::init(&settings.log_level);

    let request = match resolve_request(start, end, isins, request_path) {
        Ok(r) => r,
        Err(e) => return report(&e),
    };

    match fetch(&settings, &request) {
        Ok(outcome) => {
            eprintln!(
                "Data processing completed: {} rows from {} files ({} days missing)",
                outcome.rows,
                outcome.summary.files_read(),
                outcome.summary.missing(),
            );
            println!("{}", outcome.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn run_scan(
    config_path: Option<&PathBuf>,
    start: &str,
    end: &str,
    input_dir: Option<PathBuf>,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => apply_overrides(
            s,
            &SettingsOverrides {
                input_dir,
                ..SettingsOverrides::default()
            },
        ),
        Err(e) => return report(&e),
    };
    logging::init(&settings.log_level);

    let result = (|| -> Result<Vec<DayAvailability>, GfimError> {
        let start = parse_date("startDate", start)?;
        let end = parse_date("endDate", end)?;
        let source = XlsxReportSource::new(settings.input_dir.clone())?;
        aggregate::scan(&source, start, end)
    })();

    match result {
        Ok(days) => {
            if let Err(e) = write_scan(io::stdout().lock(), &days) {
                return report(&GfimError::Io(e));
            }
            let present = days.iter().filter(|d| d.present).count();
            eprintln!("{} of {} days have a report", present, days.len());
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

pub fn scan_status(day: &DayAvailability) -> &'static str {
    match (day.present, day.weekend) {
        (true, _) => "present",
        (false, true) => "missing (weekend)",
        (false, false) => "missing",
    }
}

/// One line per day: date, expected file name, status.
pub fn write_scan<W: io::Write>(mut out: W, days: &[DayAvailability]) -> io::Result<()> {
    for day in days {
        writeln!(out, "{}  {}  {}", day.date, day.file_name, scan_status(day))?;
    }
    out.flush()
}

fn run_extract(file: &Path, isins: &str) -> ExitCode {
    logging::init("info");

    match extract_to(file, isins, io::stdout().lock()) {
        Ok(count) => {
            eprintln!("{count} matching rows");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

/// Writes the matching rows of one report to `out` as CSV and returns how
/// many there were. A missing worksheet writes the header only.
pub fn extract_to<W: io::Write>(file: &Path, isins: &str, out: W) -> Result<usize, GfimError> {
    let filter = IsinFilter::new(parse_isins(isins)?);
    let extraction = extract_report(file, &filter)?;
    if let Extraction::SheetNotFound { sheet } = &extraction {
        eprintln!("warning: worksheet {sheet:?} not found in {}", file.display());
    }
    let rows = extraction.into_rows();
    csv_sink::write_rows(csv::Writer::from_writer(out), &rows).map_err(|e| GfimError::Output {
        path: "<stdout>".into(),
        reason: e.to_string(),
    })?;
    Ok(rows.len())
}

fn report(err: &GfimError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}
