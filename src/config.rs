use std::path::PathBuf;

use clap::Parser;

/// Files analyzed when none are given on the command line.
pub const DEFAULT_INPUTS: [(&str, &str); 4] = [
    ("test3_1.csv", "Experiment 1 (n)"),
    ("test3_2.csv", "Experiment 2 (k)"),
    ("test3_3.csv", "Experiment 3"),
    ("test3_4.csv", "Experiment 4 (r)"),
];

pub const DEFAULT_DEEP_DIVE: &str = "test3_4.csv";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Compare two algorithms' running times recorded in benchmark CSV files
#[derive(Debug, Parser)]
#[command(name = "rusty-ratio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Benchmark files to analyze, optionally labelled as FILE=LABEL
    #[arg(value_name = "FILE[=LABEL]", value_parser = parse_input)]
    pub files: Vec<InputFile>,

    /// File name that gets the per-range breakdown and largest-ratio listing
    #[arg(long, value_name = "NAME", default_value = DEFAULT_DEEP_DIVE)]
    pub deep_dive: String,

    /// Number of rows in the largest-ratio listing
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Print the report only; do not open the chart window
    #[arg(long)]
    pub headless: bool,
}

/// One benchmark file and the label used for it in reports and legends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub label: String,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

fn parse_input(arg: &str) -> Result<InputFile, String> {
    let (path, label) = match arg.split_once('=') {
        Some((path, label)) => (path, Some(label)),
        None => (arg, None),
    };
    if path.is_empty() {
        return Err("file path is empty".to_string());
    }
    let path = PathBuf::from(path);
    let label = match label {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    };
    Ok(InputFile { path, label })
}

// ---------------------------------------------------------------------------
// Resolved run configuration
// ---------------------------------------------------------------------------

/// Everything one analysis run needs, with defaults applied.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub inputs: Vec<InputFile>,
    pub deep_dive: String,
    pub top: usize,
    pub show_charts: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
            deep_dive: DEFAULT_DEEP_DIVE.to_string(),
            top: 5,
            show_charts: true,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let inputs = if cli.files.is_empty() {
            default_inputs()
        } else {
            cli.files
        };
        Self {
            inputs,
            deep_dive: cli.deep_dive,
            top: cli.top,
            show_charts: !cli.headless,
        }
    }
}

fn default_inputs() -> Vec<InputFile> {
    DEFAULT_INPUTS
        .iter()
        .map(|(path, label)| InputFile::new(*path, *label))
        .collect()
}
