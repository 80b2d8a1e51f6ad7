use std::fmt;
use std::path::PathBuf;

use crate::stats;

// ---------------------------------------------------------------------------
// Param – the independent variable column
// ---------------------------------------------------------------------------

/// Which column of the benchmark file is the swept parameter.
///
/// Detection order is `n`, `k`, `r`, then whatever the first column is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Param {
    /// Number of segments.
    N,
    K,
    R,
    /// Fallback: the first column of the header, whatever its name.
    Other(String),
}

impl Param {
    /// Priority-ordered known parameter columns.
    pub const PRIORITY: [Param; 3] = [Param::N, Param::K, Param::R];

    /// Pick the parameter column from a header row.
    ///
    /// Returns the chosen parameter and its index in `headers`, or `None` if
    /// the header row is empty.
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> Option<(Param, usize)> {
        for param in Self::PRIORITY {
            if let Some(idx) = headers.iter().position(|h| h.as_ref() == param.column()) {
                return Some((param, idx));
            }
        }
        headers
            .first()
            .map(|h| (Param::Other(h.as_ref().to_string()), 0))
    }

    /// Column name as it appears in the CSV header.
    pub fn column(&self) -> &str {
        match self {
            Param::N => "n",
            Param::K => "k",
            Param::R => "r",
            Param::Other(name) => name,
        }
    }

    /// Human-readable axis label.
    pub fn axis_label(&self) -> String {
        match self {
            Param::N => "Number of segments (n)".to_string(),
            Param::K => "Parameter k".to_string(),
            Param::R => "Parameter r".to_string(),
            Param::Other(name) => name.clone(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Measurement – one row of the CSV
// ---------------------------------------------------------------------------

/// A single benchmark point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Value of the swept parameter.
    pub x: f64,
    /// Running time of the trivial algorithm, seconds.
    pub t1: f64,
    /// Running time of the efficient algorithm, seconds.
    pub t2: f64,
}

impl Measurement {
    /// `T1 / T2` for this row.
    pub fn ratio(&self) -> f64 {
        self.t1 / self.t2
    }
}

// ---------------------------------------------------------------------------
// MeasurementTable – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows of one benchmark file, in file order.
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    pub param: Param,
    pub rows: Vec<Measurement>,
}

impl MeasurementTable {
    pub fn new(param: Param, rows: Vec<Measurement>) -> Self {
        Self { param, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.rows.iter().map(|m| m.x).collect()
    }

    pub fn t1(&self) -> Vec<f64> {
        self.rows.iter().map(|m| m.t1).collect()
    }

    pub fn t2(&self) -> Vec<f64> {
        self.rows.iter().map(|m| m.t2).collect()
    }
}

// ---------------------------------------------------------------------------
// FileAnalysis – one successfully analyzed file
// ---------------------------------------------------------------------------

/// The result of analyzing a single benchmark file.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    pub path: PathBuf,
    pub label: String,
    pub table: MeasurementTable,
    /// `T1/T2` per row, index-aligned with `table.rows`.
    pub ratio: Vec<f64>,
}

impl FileAnalysis {
    /// Build an analysis, deriving the ratio series from the table.
    pub fn new(path: PathBuf, label: String, table: MeasurementTable) -> Self {
        let ratio = stats::ratio_series(&table);
        Self {
            path,
            label,
            table,
            ratio,
        }
    }

    /// File name component of the path (used for deep-dive matching).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn param(&self) -> &Param {
        &self.table.param
    }

    pub fn mean_ratio(&self) -> f64 {
        stats::mean(&self.ratio)
    }
}
