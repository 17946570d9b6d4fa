//! Domain error types.

use crate::domain::request::RequestError;

/// Top-level error type for gfim-history.
///
/// Every variant is fatal to the run. Recoverable per-day conditions (a missing
/// report file, a missing worksheet) are not errors; they surface as
/// [`crate::domain::aggregate::DayOutcome`] values instead.
#[derive(Debug, thiserror::Error)]
pub enum GfimError {
    #[error("input directory {path} is not usable: {reason}")]
    InputDir { path: String, reason: String },

    #[error("cannot derive report date from file name {file}: {reason}")]
    ReportFileName { file: String, reason: String },

    #[error("failed to read workbook {file}: {reason}")]
    Workbook { file: String, reason: String },

    #[error("failed to write output {path}: {reason}")]
    Output { path: String, reason: String },

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GfimError {
    /// Process exit status for this error class.
    pub fn exit_status(&self) -> u8 {
        match self {
            GfimError::Io(_) | GfimError::Output { .. } => 1,
            GfimError::ConfigParse { .. }
            | GfimError::ConfigMissing { .. }
            | GfimError::ConfigInvalid { .. } => 2,
            GfimError::InputDir { .. }
            | GfimError::ReportFileName { .. }
            | GfimError::Workbook { .. } => 3,
            GfimError::Request(_) => 4,
        }
    }
}

impl From<&GfimError> for std::process::ExitCode {
    fn from(err: &GfimError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
