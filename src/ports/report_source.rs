//! Daily report access port trait.

use crate::domain::error::GfimError;
use crate::domain::extract::Extraction;
use crate::domain::request::IsinFilter;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub trait ReportSource {
    /// Path of the report published for `date`, or `None` when no such file
    /// exists.
    fn locate(&self, date: NaiveDate) -> Result<Option<PathBuf>, GfimError>;

    /// Extracts the requested rows from the report at `path`.
    ///
    /// A missing worksheet is reported as [`Extraction::SheetNotFound`];
    /// only unreadable files are errors.
    fn extract(&self, path: &Path, filter: &IsinFilter) -> Result<Extraction, GfimError>;
}
