//! Run settings read from configuration.
//!
//! Every key is optional:
//!
//! ```ini
//! [paths]
//! input_dir = DATA
//! output_dir = output
//!
//! [output]
//! file_name = historical_gfim.xlsx
//! format = xlsx
//!
//! [logging]
//! level = info
//! ```

use crate::domain::error::GfimError;
use crate::ports::config_port::ConfigPort;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_INPUT_DIR: &str = "DATA";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_STEM: &str = "historical_gfim";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown format {other:?} (expected xlsx or csv)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Explicit output file name; derived from the format when unset.
    pub file_name: Option<String>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: None,
            format: OutputFormat::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    pub fn output_path(&self) -> PathBuf {
        let name = self
            .file_name
            .clone()
            .unwrap_or_else(|| format!("{}.{}", DEFAULT_OUTPUT_STEM, self.format.extension()));
        self.output_dir.join(name)
    }
}

pub fn build_settings(config: &dyn ConfigPort) -> Result<Settings, GfimError> {
    let defaults = Settings::default();

    if matches!(config.get_string("paths", "input_dir"), Some(v) if v.trim().is_empty()) {
        return Err(GfimError::ConfigInvalid {
            section: "paths".into(),
            key: "input_dir".into(),
            reason: "input_dir must not be empty".into(),
        });
    }

    let format = match config.get_non_empty("output", "format") {
        Some(v) => v.parse().map_err(|reason| GfimError::ConfigInvalid {
            section: "output".into(),
            key: "format".into(),
            reason,
        })?,
        None => defaults.format,
    };

    Ok(Settings {
        input_dir: config
            .get_non_empty("paths", "input_dir")
            .map(PathBuf::from)
            .unwrap_or(defaults.input_dir),
        output_dir: config
            .get_non_empty("paths", "output_dir")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir),
        file_name: config.get_non_empty("output", "file_name"),
        format,
        log_level: config
            .get_non_empty("logging", "level")
            .unwrap_or(defaults.log_level),
    })
}
