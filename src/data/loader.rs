use std::path::Path;

use log::info;
use thiserror::Error;

use super::model::RawTable;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to read the dataset into a [`RawTable`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {message}")]
    Malformed { line: u64, message: String },
}

fn csv_error(path: &Path, err: csv::Error) -> LoadError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            path: path.display().to_string(),
            source,
        },
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => LoadError::Malformed {
            line: pos.map(|p| p.line()).unwrap_or(0),
            message: format!("expected {expected_len} fields, found {len}"),
        },
        csv::ErrorKind::Utf8 { pos, err } => LoadError::Malformed {
            line: pos.map(|p| p.line()).unwrap_or(0),
            message: format!("invalid UTF-8: {err}"),
        },
        other => LoadError::Malformed {
            line: 0,
            message: format!("{other:?}"),
        },
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited text file into a [`RawTable`].
///
/// The first record is the header; every following record must carry the
/// same number of fields (ragged records are rejected as malformed).
/// Cells are kept as text; parsing happens during cleaning.
pub fn load_csv(path: &Path) -> Result<RawTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    info!(
        "loaded {} rows x {} columns from {}",
        rows.len(),
        columns.len(),
        path.display()
    );

    Ok(RawTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_header_and_rows() {
        let path = write_temp(
            "vinoscope_loader_ok.csv",
            "alcohol,quality\n9.4,5\n10.2,6\n",
        );
        let raw = load_csv(&path).unwrap();
        assert_eq!(raw.columns, vec!["alcohol", "quality"]);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.rows[0], vec!["9.4", "5"]);
        assert_eq!(raw.rows[1], vec!["10.2", "6"]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("vinoscope_no_such_file.csv");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn ragged_record_is_malformed() {
        let path = write_temp(
            "vinoscope_loader_ragged.csv",
            "alcohol,quality\n9.4,5\n10.2\n",
        );
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let path = write_temp(
            "vinoscope_loader_trim.csv",
            "alcohol, quality\n9.4,5\n",
        );
        let raw = load_csv(&path).unwrap();
        assert_eq!(raw.columns, vec!["alcohol", "quality"]);
        let _ = fs::remove_file(&path);
    }
}
