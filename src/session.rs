use std::io::{self, Write};
use std::path::PathBuf;

use crate::charts::Comparison;
use crate::config::RunConfig;
use crate::data::loader::{self, LoadError};
use crate::data::model::FileAnalysis;
use crate::report;

// ---------------------------------------------------------------------------
// Analysis run
// ---------------------------------------------------------------------------

/// Outcome of analyzing every configured file.
#[derive(Debug, Default)]
pub struct Session {
    /// Successfully analyzed files, in configuration order.
    pub analyses: Vec<FileAnalysis>,
    /// Files that could not be loaded, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

impl Session {
    /// Load and report every input, then the cross-file sections.
    ///
    /// A file that fails to load is reported and skipped; only I/O errors on
    /// `out` abort the run.
    pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> io::Result<Self> {
        let mut session = Session::default();

        for input in &config.inputs {
            match loader::load_table(&input.path) {
                Ok(table) => {
                    log::info!(
                        "Loaded {} rows from {} (parameter '{}')",
                        table.len(),
                        input.path.display(),
                        table.param
                    );
                    let analysis =
                        FileAnalysis::new(input.path.clone(), input.label.clone(), table);
                    report::file_report(out, &analysis)?;
                    session.analyses.push(analysis);
                }
                Err(err @ LoadError::FileNotFound(_)) => {
                    log::warn!("{err}");
                    writeln!(
                        out,
                        "\nWarning: file {} not found, skipping.",
                        input.path.display()
                    )?;
                    session.skipped.push((input.path.clone(), err.to_string()));
                }
                Err(err) => {
                    log::error!("{err}");
                    writeln!(
                        out,
                        "\nError while processing {}: {err}",
                        input.path.display()
                    )?;
                    session.skipped.push((input.path.clone(), err.to_string()));
                }
            }
        }

        if session.comparison().is_some() {
            report::comparison_report(out, &session.analyses)?;
        } else {
            log::debug!(
                "{} file(s) loaded, skipping comparison",
                session.analyses.len()
            );
        }

        if !session.analyses.is_empty() {
            report::summary_report(out, &session.analyses)?;
        }

        match session.find(&config.deep_dive) {
            Some(a) => report::deep_dive_report(out, a, &report::DEEP_DIVE_RANGES, config.top)?,
            None => log::debug!("{} not loaded, skipping deep-dive", config.deep_dive),
        }

        Ok(session)
    }

    /// Comparison grid over all loaded files, if there are at least two.
    pub fn comparison(&self) -> Option<Comparison> {
        Comparison::build(&self.analyses)
    }

    /// Loaded analysis whose file name is `name`.
    pub fn find(&self, name: &str) -> Option<&FileAnalysis> {
        self.analyses.iter().find(|a| a.file_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::config::InputFile;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn config(inputs: Vec<InputFile>) -> RunConfig {
        RunConfig {
            inputs,
            show_charts: false,
            ..RunConfig::default()
        }
    }

    fn run(cfg: &RunConfig) -> (Session, String) {
        let mut buf = Vec::new();
        let session = Session::run(cfg, &mut buf).unwrap();
        (session, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn failures_do_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "test3_1.csv", "n,T1,T2\n1,2,1\n101,8,2\n");
        let bad = write(dir.path(), "bad.csv", "n,T1,T2\n1,x,1\n");
        let missing = dir.path().join("missing.csv");

        let (session, text) = run(&config(vec![
            InputFile::new(&missing, "M"),
            InputFile::new(&bad, "B"),
            InputFile::new(&good, "G"),
        ]));

        assert_eq!(session.analyses.len(), 1);
        assert_eq!(session.skipped.len(), 2);
        assert!(text.contains("not found, skipping"));
        assert!(text.contains("Error while processing"));
        assert!(text.contains("SUMMARY STATISTICS"));
    }

    #[test]
    fn single_file_skips_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "k,T1,T2\n1,2,1\n");

        let (session, text) = run(&config(vec![InputFile::new(a, "A")]));
        assert!(session.comparison().is_none());
        assert!(!text.contains("COMPARATIVE ANALYSIS"));
    }

    #[test]
    fn two_files_compare() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "n,T1,T2\n1,2,1\n");
        let b = write(dir.path(), "b.csv", "k,T1,T2\n1,6,2\n");

        let (session, text) = run(&config(vec![InputFile::new(a, "A"), InputFile::new(b, "B")]));
        assert!(session.comparison().is_some());
        assert!(text.contains("COMPARATIVE ANALYSIS"));
        assert!(text.contains("  B: 3.0x"));
    }

    #[test]
    fn deep_dive_only_for_designated_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = write(
            dir.path(),
            "test3_4.csv",
            "r,T1,T2\n0.0005,2.0,0.5\n0.002,4.0,0.4\n",
        );
        let other = write(dir.path(), "other.csv", "r,T1,T2\n0.0005,2.0,0.5\n");

        let (_, text) = run(&config(vec![InputFile::new(&other, "O")]));
        assert!(!text.contains("DETAILED ANALYSIS"));

        let (session, text) = run(&config(vec![InputFile::new(&r, "R")]));
        assert!(session.find("test3_4.csv").is_some());
        assert!(text.contains("DETAILED ANALYSIS test3_4.csv (parameter r)"));
    }

    #[test]
    fn nothing_loaded_prints_only_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (session, text) = run(&config(vec![InputFile::new(dir.path().join("x.csv"), "X")]));
        assert!(session.analyses.is_empty());
        assert!(!text.contains("SUMMARY"));
    }
}
