//! Plain-text report written to stdout (or any `Write` in tests).

use std::io::{self, Write};

use crate::data::model::{FileAnalysis, Param};
use crate::stats::{self, FileSummary, ParamCorrelation, Range};

/// Parameter ranges used by the deep-dive breakdown.
pub const DEEP_DIVE_RANGES: [Range; 3] = [
    Range::new(0.0001, 0.001),
    Range::new(0.001, 0.005),
    Range::new(0.005, 0.01),
];

fn banner<W: Write>(out: &mut W, width: usize, title: &str) -> io::Result<()> {
    let rule = "=".repeat(width);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Parameter value in the usual short float notation: plain decimals in
/// `[1e-4, 1e16)`, otherwise scientific with a signed two-digit exponent
/// (`1e-05`, `2.5e+16`).
pub fn fmt_param(x: f64) -> String {
    let magnitude = x.abs();
    if x == 0.0 || !x.is_finite() || (1e-4..1e16).contains(&magnitude) {
        return x.to_string();
    }
    let sci = format!("{x:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => sci,
    }
}

// ---------------------------------------------------------------------------
// Per-file report
// ---------------------------------------------------------------------------

pub fn file_report<W: Write>(out: &mut W, a: &FileAnalysis) -> io::Result<()> {
    banner(
        out,
        50,
        &format!("Analyzing file: {} ({})", a.path.display(), a.label),
    )?;

    let s = FileSummary::compute(&a.table, &a.ratio);
    writeln!(out, "Data statistics:")?;
    writeln!(out, "Measurements: {}", s.count)?;
    writeln!(
        out,
        "{} range: {} to {}",
        a.param().axis_label(),
        fmt_param(s.x_min),
        fmt_param(s.x_max)
    )?;
    writeln!(out, "Max T1: {:.6e} s", s.t1.max)?;
    writeln!(out, "Max T2: {:.6e} s", s.t2.max)?;
    writeln!(out, "Min T1: {:.6e} s", s.t1.min)?;
    writeln!(out, "Min T2: {:.6e} s", s.t2.min)?;
    writeln!(out, "Mean T1: {:.6e} s", s.t1.mean)?;
    writeln!(out, "Mean T2: {:.6e} s", s.t2.mean)?;
    writeln!(out, "Mean T1/T2 ratio: {:.2}", s.ratio.mean)?;
    writeln!(out, "Max T1/T2 ratio: {:.2}", s.ratio.max)?;
    writeln!(out, "Min T1/T2 ratio: {:.2}", s.ratio.min)?;
    writeln!(out, "Median T1/T2 ratio: {:.2}", s.ratio_median)?;

    if *a.param() == Param::R {
        let c = ParamCorrelation::compute(&a.table, &a.ratio);
        writeln!(out, "\nAdditional analysis for parameter r:")?;
        if let Some((x, ratio)) = c.best {
            writeln!(
                out,
                "Largest speedup at r = {}: {ratio:.1} times",
                fmt_param(x)
            )?;
        }
        writeln!(out, "Correlation r-T1: {:.3}", c.corr_t1)?;
        writeln!(out, "Correlation r-T2: {:.3}", c.corr_t2)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Cross-file sections
// ---------------------------------------------------------------------------

pub fn comparison_report<W: Write>(out: &mut W, analyses: &[FileAnalysis]) -> io::Result<()> {
    banner(out, 60, "COMPARATIVE ANALYSIS OF ALL FILES")?;
    writeln!(out, "Mean efficiency per file:")?;
    for a in analyses {
        writeln!(out, "  {}: {:.1}x", a.label, a.mean_ratio())?;
    }
    Ok(())
}

pub fn summary_report<W: Write>(out: &mut W, analyses: &[FileAnalysis]) -> io::Result<()> {
    banner(out, 60, "SUMMARY STATISTICS")?;
    for a in analyses {
        let s = FileSummary::compute(&a.table, &a.ratio);
        writeln!(out, "\n{}:", a.label)?;
        writeln!(out, "  Parameter: {}", a.param())?;
        writeln!(out, "  Data size: {} rows", s.count)?;
        writeln!(
            out,
            "  Parameter range: {} - {}",
            fmt_param(s.x_min),
            fmt_param(s.x_max)
        )?;
        writeln!(out, "  Max T1/T2: {:.1}x", s.ratio.max)?;
        writeln!(out, "  Min T1/T2: {:.1}x", s.ratio.min)?;
        writeln!(out, "  Mean T1/T2: {:.1}x", s.ratio.mean)?;
        writeln!(out, "  Median T1/T2: {:.1}x", s.ratio_median)?;
        writeln!(
            out,
            "  Efficient algorithm is {:.1} times faster on average",
            s.ratio.mean
        )?;
    }
    Ok(())
}

/// Per-range breakdown and largest-ratio listing for one file.
pub fn deep_dive_report<W: Write>(
    out: &mut W,
    a: &FileAnalysis,
    ranges: &[Range],
    top: usize,
) -> io::Result<()> {
    let param = a.param();
    banner(
        out,
        60,
        &format!("DETAILED ANALYSIS {} (parameter {param})", a.file_name()),
    )?;

    for bucket in stats::stratify(&a.table, ranges) {
        if bucket.rows.is_empty() {
            continue;
        }
        writeln!(
            out,
            "\nRange {param}: {} - {}",
            fmt_param(bucket.range.lo),
            fmt_param(bucket.range.hi)
        )?;
        writeln!(out, "  Points: {}", bucket.rows.len())?;
        writeln!(out, "  Mean T1: {:.6e} s", bucket.mean_t1)?;
        writeln!(out, "  Mean T2: {:.6e} s", bucket.mean_t2)?;
        writeln!(out, "  Mean T1/T2 ratio: {:.1}x", bucket.mean_ratio)?;
    }

    writeln!(out, "\nTop {top} largest speedups of the efficient algorithm:")?;
    for i in stats::top_ratios(&a.ratio, top) {
        writeln!(
            out,
            "  {param} = {}: {:.1}x speedup",
            fmt_param(a.table.rows[i].x),
            a.ratio[i]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::model::{Measurement, MeasurementTable};

    fn r_analysis() -> FileAnalysis {
        let table = MeasurementTable::new(
            Param::R,
            vec![
                Measurement { x: 0.0005, t1: 2.0, t2: 0.5 },
                Measurement { x: 0.002, t1: 4.0, t2: 0.4 },
            ],
        );
        FileAnalysis::new(PathBuf::from("test3_4.csv"), "Experiment 4 (r)".into(), table)
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn file_report_includes_r_extras() {
        let text = render(|out| file_report(out, &r_analysis()));
        assert!(text.contains("Measurements: 2"));
        assert!(text.contains("Parameter r range: 0.0005 to 0.002"));
        assert!(text.contains("Mean T1/T2 ratio: 7.00"));
        assert!(text.contains("Median T1/T2 ratio: 7.00"));
        assert!(text.contains("Largest speedup at r = 0.002: 10.0 times"));
        assert!(text.contains("Correlation r-T1: 1.000"));
        assert!(text.contains("Correlation r-T2: -1.000"));
    }

    #[test]
    fn small_parameters_use_scientific_notation() {
        assert_eq!(fmt_param(0.00001), "1e-05");
        assert_eq!(fmt_param(0.000015), "1.5e-05");
        assert_eq!(fmt_param(-0.00002), "-2e-05");
        assert_eq!(fmt_param(2.5e16), "2.5e+16");
        assert_eq!(fmt_param(0.0001), "0.0001");
        assert_eq!(fmt_param(101.0), "101");
        assert_eq!(fmt_param(0.0), "0");

        let table = MeasurementTable::new(
            Param::R,
            vec![
                Measurement { x: 0.00001, t1: 1.0, t2: 1.0 },
                Measurement { x: 0.00005, t1: 6.0, t2: 2.0 },
            ],
        );
        let a = FileAnalysis::new(PathBuf::from("tiny.csv"), "Tiny".into(), table);
        let text = render(|out| file_report(out, &a));
        assert!(text.contains("Parameter r range: 1e-05 to 5e-05"));
        assert!(text.contains("Largest speedup at r = 5e-05: 3.0 times"));
    }

    #[test]
    fn file_report_skips_r_extras_for_other_params() {
        let mut a = r_analysis();
        a.table.param = Param::N;
        let text = render(|out| file_report(out, &a));
        assert!(!text.contains("Correlation"));
    }

    #[test]
    fn deep_dive_lists_buckets_and_top_rows() {
        let text = render(|out| deep_dive_report(out, &r_analysis(), &DEEP_DIVE_RANGES, 5));
        assert!(text.contains("Range r: 0.0001 - 0.001"));
        assert!(text.contains("Range r: 0.001 - 0.005"));
        assert!(!text.contains("Range r: 0.005 - 0.01"));

        let first = text.find("r = 0.002: 10.0x").unwrap();
        let second = text.find("r = 0.0005: 4.0x").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_cells_are_skipped_in_report() {
        let table = crate::data::loader::read_table("n,T1,T2\n1,2,1\n2,,1\n3,8,2\n".as_bytes())
            .unwrap();
        let a = FileAnalysis::new(PathBuf::from("gaps.csv"), "Gaps".into(), table);
        let text = render(|out| file_report(out, &a));
        assert!(text.contains("Measurements: 3"));
        assert!(text.contains("Mean T1: 5.000000e0 s"));
        assert!(text.contains("Mean T1/T2 ratio: 3.00"));
        assert!(text.contains("Min T1/T2 ratio: 2.00"));
    }

    #[test]
    fn summary_mentions_every_file() {
        let mut b = r_analysis();
        b.label = "Other".into();
        let text = render(|out| summary_report(out, &[r_analysis(), b]));
        assert!(text.contains("Experiment 4 (r):"));
        assert!(text.contains("Other:"));
        assert!(text.contains("Mean T1/T2: 7.0x"));
    }
}
