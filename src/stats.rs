//! Descriptive statistics over benchmark tables.
//!
//! Every reduction skips NaN values; infinities (e.g. a zero `T2`) take part
//! as ordinary floats.

use crate::data::model::{Measurement, MeasurementTable};

// ---------------------------------------------------------------------------
// Ratio series
// ---------------------------------------------------------------------------

/// `T1[i] / T2[i]` for every row, same order as the table.
pub fn ratio_series(table: &MeasurementTable) -> Vec<f64> {
    table.rows.iter().map(Measurement::ratio).collect()
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

fn defined(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Arithmetic mean; NaN for an empty input.
pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = defined(values).fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

pub fn min(values: &[f64]) -> f64 {
    defined(values).reduce(f64::min).unwrap_or(f64::NAN)
}

pub fn max(values: &[f64]) -> f64 {
    defined(values).reduce(f64::max).unwrap_or(f64::NAN)
}

/// Median; the mean of the two middle values for even-length input.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted: Vec<f64> = defined(values).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Index of the first maximum, ignoring NaN.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Pearson linear correlation coefficient over rows where both values are
/// defined.
///
/// NaN when fewer than two pairs remain or either series is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Min / max / mean of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SeriesSummary {
    pub fn of(values: &[f64]) -> Self {
        Self {
            min: min(values),
            max: max(values),
            mean: mean(values),
        }
    }
}

/// Everything the per-file report prints.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub t1: SeriesSummary,
    pub t2: SeriesSummary,
    pub ratio: SeriesSummary,
    pub ratio_median: f64,
}

impl FileSummary {
    pub fn compute(table: &MeasurementTable, ratio: &[f64]) -> Self {
        let xs = table.xs();
        Self {
            count: table.len(),
            x_min: min(&xs),
            x_max: max(&xs),
            t1: SeriesSummary::of(&table.t1()),
            t2: SeriesSummary::of(&table.t2()),
            ratio: SeriesSummary::of(ratio),
            ratio_median: median(ratio),
        }
    }
}

/// Extra figures reported when the swept parameter is `r`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamCorrelation {
    /// `(x, ratio)` of the row with the largest ratio.
    pub best: Option<(f64, f64)>,
    pub corr_t1: f64,
    pub corr_t2: f64,
}

impl ParamCorrelation {
    pub fn compute(table: &MeasurementTable, ratio: &[f64]) -> Self {
        let xs = table.xs();
        Self {
            best: argmax(ratio).map(|i| (table.rows[i].x, ratio[i])),
            corr_t1: pearson(&xs, &table.t1()),
            corr_t2: pearson(&xs, &table.t2()),
        }
    }
}

// ---------------------------------------------------------------------------
// Stratification
// ---------------------------------------------------------------------------

/// Closed parameter interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }
}

/// Rows of one stratum and their means.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub range: Range,
    /// Row indices into the source table.
    pub rows: Vec<usize>,
    pub mean_t1: f64,
    pub mean_t2: f64,
    pub mean_ratio: f64,
}

/// Split rows into the given ranges.
///
/// A row goes to the first range containing it, so buckets never share rows
/// even when neighbouring ranges share a bound. Rows outside every range are
/// dropped.
pub fn stratify(table: &MeasurementTable, ranges: &[Range]) -> Vec<Bucket> {
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); ranges.len()];
    for (i, row) in table.rows.iter().enumerate() {
        if let Some(slot) = ranges.iter().position(|r| r.contains(row.x)) {
            members[slot].push(i);
        }
    }

    ranges
        .iter()
        .zip(members)
        .map(|(&range, rows)| {
            let pick = |f: fn(&Measurement) -> f64| -> Vec<f64> {
                rows.iter().map(|&i| f(&table.rows[i])).collect()
            };
            Bucket {
                range,
                mean_t1: mean(&pick(|m| m.t1)),
                mean_t2: mean(&pick(|m| m.t2)),
                mean_ratio: mean(&pick(Measurement::ratio)),
                rows,
            }
        })
        .collect()
}

/// Row indices of the `n` largest ratios, largest first.
///
/// NaN ratios are never listed; equal ratios keep file order.
pub fn top_ratios(ratio: &[f64], n: usize) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..ratio.len()).filter(|&i| !ratio[i].is_nan()).collect();
    idx.sort_by(|&a, &b| ratio[b].total_cmp(&ratio[a]));
    idx.truncate(n);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Param;

    fn table(param: Param, rows: &[(f64, f64, f64)]) -> MeasurementTable {
        MeasurementTable::new(
            param,
            rows.iter()
                .map(|&(x, t1, t2)| Measurement { x, t1, t2 })
                .collect(),
        )
    }

    #[test]
    fn two_point_r_scenario() {
        let t = table(Param::R, &[(0.0005, 2.0, 0.5), (0.002, 4.0, 0.4)]);
        let ratio = ratio_series(&t);
        assert_eq!(ratio, vec![4.0, 10.0]);
        assert_eq!(mean(&ratio), 7.0);

        let corr = ParamCorrelation::compute(&t, &ratio);
        assert!((corr.corr_t1 - 1.0).abs() < 1e-12);
        assert!((corr.corr_t2 + 1.0).abs() < 1e-12);
        assert_eq!(corr.best, Some((0.002, 10.0)));
    }

    #[test]
    fn ratio_matches_rowwise_division() {
        let t = table(
            Param::N,
            &[(1.0, 1e-3, 2e-4), (101.0, 0.37, 0.0011), (201.0, 1.9, 0.0023)],
        );
        let ratio = ratio_series(&t);
        assert_eq!(ratio.len(), t.len());
        for (row, r) in t.rows.iter().zip(&ratio) {
            assert_eq!(*r, row.t1 / row.t2);
        }
    }

    #[test]
    fn summary_reductions() {
        let t = table(Param::K, &[(1.0, 4.0, 2.0), (11.0, 9.0, 1.0), (21.0, 2.0, 2.0)]);
        let ratio = ratio_series(&t);
        let s = FileSummary::compute(&t, &ratio);
        assert_eq!(s.count, 3);
        assert_eq!((s.x_min, s.x_max), (1.0, 21.0));
        assert_eq!(s.t1, SeriesSummary { min: 2.0, max: 9.0, mean: 5.0 });
        assert_eq!(s.ratio.max, 9.0);
        assert_eq!(s.ratio.min, 1.0);
        assert_eq!(s.ratio_median, 2.0);
    }

    #[test]
    fn summary_skips_missing_timings() {
        let t = table(
            Param::N,
            &[(1.0, 2.0, 1.0), (2.0, f64::NAN, 1.0), (3.0, 8.0, 2.0)],
        );
        let ratio = ratio_series(&t);
        assert!(ratio[1].is_nan());

        let s = FileSummary::compute(&t, &ratio);
        assert_eq!(s.count, 3);
        assert_eq!(s.t1, SeriesSummary { min: 2.0, max: 8.0, mean: 5.0 });
        assert_eq!(s.t2.mean, 4.0 / 3.0);
        assert_eq!(s.ratio.mean, 3.0);
        assert_eq!(s.ratio_median, 3.0);
        assert_eq!(top_ratios(&ratio, 5), vec![2, 0]);
    }

    #[test]
    fn median_even_length() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn reductions_skip_nan() {
        let v = [f64::NAN, 1.0, 5.0];
        assert_eq!(mean(&v), 3.0);
        assert_eq!(min(&v), 1.0);
        assert_eq!(max(&v), 5.0);
        assert_eq!(argmax(&v), Some(2));
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn zero_t2_gives_infinite_ratio() {
        let t = table(Param::N, &[(1.0, 1.0, 0.0), (2.0, 2.0, 1.0)]);
        let ratio = ratio_series(&t);
        assert!(ratio[0].is_infinite());
        assert_eq!(argmax(&ratio), Some(0));
    }

    #[test]
    fn argmax_keeps_first_tie() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn pearson_degenerate() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[1.0, 1.0], &[2.0, 3.0]).is_nan());
    }

    #[test]
    fn stratify_buckets_are_disjoint() {
        let t = table(
            Param::R,
            &[
                (0.00005, 1.0, 1.0),
                (0.0001, 2.0, 1.0),
                (0.001, 4.0, 1.0),
                (0.003, 6.0, 2.0),
                (0.005, 8.0, 2.0),
                (0.01, 9.0, 3.0),
                (0.02, 1.0, 1.0),
            ],
        );
        let ranges = [
            Range::new(0.0001, 0.001),
            Range::new(0.001, 0.005),
            Range::new(0.005, 0.01),
        ];
        let buckets = stratify(&t, &ranges);
        assert_eq!(buckets[0].rows, vec![1, 2]);
        assert_eq!(buckets[1].rows, vec![3, 4]);
        assert_eq!(buckets[2].rows, vec![5]);

        let covered: usize = buckets.iter().map(|b| b.rows.len()).sum();
        assert_eq!(covered, 5);
        assert_eq!(buckets[0].mean_ratio, 3.0);
        assert_eq!(buckets[1].mean_t1, 7.0);
    }

    #[test]
    fn empty_bucket_means_are_nan() {
        let t = table(Param::R, &[(0.5, 1.0, 1.0)]);
        let buckets = stratify(&t, &[Range::new(0.0, 0.1)]);
        assert!(buckets[0].rows.is_empty());
        assert!(buckets[0].mean_ratio.is_nan());
    }

    #[test]
    fn top_ratios_sorted_and_truncated() {
        let ratio = [3.0, 9.0, f64::NAN, 1.0, 9.0, 7.0, 5.0];
        let top = top_ratios(&ratio, 5);
        assert_eq!(top, vec![1, 4, 5, 6, 0]);
        for pair in top.windows(2) {
            assert!(ratio[pair[0]] >= ratio[pair[1]]);
        }
        assert_eq!(top_ratios(&[2.0, 1.0], 5), vec![0, 1]);
    }
}
