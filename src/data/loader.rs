use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::model::{Measurement, MeasurementTable, Param};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a benchmark file could not be loaded. Neither kind is fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a benchmark table from a CSV file.
///
/// The file needs a header row with `T1`, `T2` and a parameter column
/// (see [`Param::detect`]).
pub fn load_table(path: &Path) -> std::result::Result<MeasurementTable, LoadError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(LoadError::Malformed {
                path: path.to_path_buf(),
                reason: format!("opening file: {e}"),
            });
        }
    };

    read_table(file).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: header row, then one measurement per line, e.g.
///
/// ```text
/// n,T1,T2
/// 1,1.2e-06,8e-07
/// 101,0.000152,2.1e-05
/// ```
///
/// Columns other than the parameter, `T1` and `T2` are ignored.
pub fn read_table<R: Read>(input: R) -> Result<MeasurementTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let (param, x_idx) = Param::detect(&headers).context("CSV has no columns")?;
    let t1_idx = headers
        .iter()
        .position(|h| h == "T1")
        .context("CSV missing 'T1' column")?;
    let t2_idx = headers
        .iter()
        .position(|h| h == "T2")
        .context("CSV missing 'T2' column")?;

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let x = parse_cell(&record, x_idx, row_no, param.column())?;
        let t1 = parse_cell(&record, t1_idx, row_no, "T1")?;
        let t2 = parse_cell(&record, t2_idx, row_no, "T2")?;

        rows.push(Measurement { x, t1, t2 });
    }

    Ok(MeasurementTable::new(param, rows))
}

fn parse_cell(record: &csv::StringRecord, idx: usize, row: usize, col: &str) -> Result<f64> {
    let Some(tok) = record.get(idx) else {
        bail!("Row {row}: missing '{col}' value");
    };
    // Empty cells are missing measurements; the statistics skip them.
    if tok.is_empty() {
        return Ok(f64::NAN);
    }
    tok.parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{tok}' is not a number"))
}
