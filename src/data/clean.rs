use log::{info, warn};
use thiserror::Error;

use super::model::{RawTable, Table, FEATURE_COLUMNS, QUALITY_COLUMN};

/// Cell contents treated as missing values.
const NULL_MARKERS: [&str; 12] = [
    "", "NA", "N/A", "na", "n/a", "null", "NULL", "None", "none", "NaN", "nan", ".",
];

/// Structural failure while coercing the raw table.
#[derive(Debug, Error, PartialEq)]
pub enum CleanError {
    #[error("designated numeric column '{0}' is missing from the header")]
    MissingColumn(String),
}

/// Clean a raw table into a numeric [`Table`].
///
/// Rows containing a missing field are dropped, every cell is parsed as a
/// number (rows that fail to parse are dropped), and the quality label is
/// truncated toward zero to an integer category. Row order is preserved.
/// Dropping is a data-quality filter, not an error; the count is logged.
pub fn clean(raw: &RawTable) -> Result<Table, CleanError> {
    for name in FEATURE_COLUMNS.iter().copied().chain([QUALITY_COLUMN]) {
        if raw.column_index(name).is_none() {
            return Err(CleanError::MissingColumn(name.to_string()));
        }
    }
    let quality_idx = raw
        .column_index(QUALITY_COLUMN)
        .ok_or_else(|| CleanError::MissingColumn(QUALITY_COLUMN.to_string()))?;

    let mut rows = Vec::with_capacity(raw.rows.len());
    let mut dropped = 0usize;
    'rows: for cells in &raw.rows {
        let mut parsed = Vec::with_capacity(cells.len());
        for cell in cells {
            let text = cell.trim();
            if NULL_MARKERS.contains(&text) {
                dropped += 1;
                continue 'rows;
            }
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => parsed.push(value),
                _ => {
                    dropped += 1;
                    continue 'rows;
                }
            }
        }
        parsed[quality_idx] = parsed[quality_idx].trunc();
        rows.push(parsed);
    }

    if dropped > 0 {
        warn!("dropped {dropped} incomplete or non-numeric rows during cleaning");
    }
    info!("cleaned table: {} of {} rows retained", rows.len(), raw.len());

    Ok(Table {
        columns: raw.columns.clone(),
        rows,
    })
}
