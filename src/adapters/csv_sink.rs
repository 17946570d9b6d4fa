//! CSV sink for the combined result.

use crate::domain::error::GfimError;
use crate::domain::row::{ExtractedRow, CombinedResult, COLUMN_NAMES};
use crate::ports::result_sink::ResultSink;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

impl ResultSink for CsvSink {
    fn write(&self, result: &CombinedResult, output_path: &Path) -> Result<(), GfimError> {
        let output_err = |reason: String| GfimError::Output {
            path: output_path.display().to_string(),
            reason,
        };
        let writer = csv::Writer::from_path(output_path).map_err(|e| output_err(e.to_string()))?;
        write_rows(writer, result.rows()).map_err(|e| output_err(e.to_string()))
    }
}

/// Writes a header record followed by `rows` to any CSV writer.
pub fn write_rows<W: io::Write>(
    mut writer: csv::Writer<W>,
    rows: &[ExtractedRow],
) -> Result<(), csv::Error> {
    writer.write_record(COLUMN_NAMES)?;
    for row in rows {
        writer.write_record(row.cells().iter().map(|c| c.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::CellValue;
    use tempfile::TempDir;

    fn row(isin: &str) -> ExtractedRow {
        ExtractedRow {
            isin: isin.into(),
            closing_yield: CellValue::Number(27.5),
            closing_price: CellValue::Number(100.0),
            volume: CellValue::Empty,
            number_traded: CellValue::Text("-".into()),
            date: "03/15/2024".into(),
        }
    }

    #[test]
    fn write_rows_formats_cells() {
        let mut buf = Vec::new();
        write_rows(csv::Writer::from_writer(&mut buf), &[row("GHGGOG072816")]).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ISIN,CLOSING YIELD,END OF DAY CLOSING PRICE,VOLUME,NUMBER TRADED,Date\n\
             GHGGOG072816,27.5,100,,-,03/15/2024\n"
        );
    }

    #[test]
    fn sink_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historical_gfim.csv");
        std::fs::write(&path, "stale content that is longer than the new file\n".repeat(10)).unwrap();

        CsvSink.write(&CombinedResult::new(), &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "ISIN,CLOSING YIELD,END OF DAY CLOSING PRICE,VOLUME,NUMBER TRADED,Date\n"
        );
    }
}
