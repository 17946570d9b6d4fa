//! Combined result persistence port trait.

use crate::domain::error::GfimError;
use crate::domain::row::CombinedResult;
use std::path::Path;

/// Port for writing the combined result.
pub trait ResultSink {
    /// Writes `result` to `output_path`, replacing any existing file.
    fn write(&self, result: &CombinedResult, output_path: &Path) -> Result<(), GfimError>;
}
