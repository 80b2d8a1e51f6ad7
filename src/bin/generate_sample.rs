//! Writes synthetic `test3_1.csv` … `test3_4.csv` files shaped like real
//! segment-intersection benchmark output, for trying the analyzer out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Generate synthetic benchmark CSV files
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Directory the CSV files are written to
    #[arg(default_value = ".")]
    out_dir: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// One output row; the parameter column name is written separately.
#[derive(Serialize)]
struct Row {
    param: f64,
    #[serde(rename = "T1")]
    t1: f64,
    #[serde(rename = "T2")]
    t2: f64,
}

/// SplitMix64: one 64-bit word of state, enough for reproducible noise.
struct Jitter {
    state: u64,
}

impl Jitter {
    fn new(seed: u64) -> Self {
        Jitter { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` from the top 53 bits.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * f64::EPSILON / 2.0
    }

    /// Multiplicative factor in `[1 - spread, 1 + spread)`.
    fn factor(&mut self, spread: f64) -> f64 {
        1.0 + spread * (2.0 * self.unit() - 1.0)
    }
}

/// Pairwise check of every segment: quadratic.
fn trivial_time(n: f64, rng: &mut Jitter) -> f64 {
    2.0e-9 * n * n * rng.factor(0.15) + 1.0e-7
}

/// Sweep-line with a balanced tree: `n log n`.
fn efficient_time(n: f64, rng: &mut Jitter) -> f64 {
    4.0e-8 * n * (n + 1.0).log2() * rng.factor(0.15) + 2.0e-7
}

fn write_file(dir: &Path, name: &str, param: &str, rows: &[Row]) -> Result<()> {
    let path = dir.join(name);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record([param, "T1", "T2"])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = Jitter::new(args.seed);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    // 3.1: n = 1..10000 step 100
    let rows: Vec<Row> = (1..=10_000u32)
        .step_by(100)
        .map(|n| {
            let n = f64::from(n);
            Row {
                param: n,
                t1: trivial_time(n, &mut rng),
                t2: efficient_time(n, &mut rng),
            }
        })
        .collect();
    write_file(&args.out_dir, "test3_1.csv", "n", &rows)?;

    // 3.2: n = 1000, k = 1..1000 step 10; the efficient scan stops at the
    // first intersection, which sits near segment k.
    let rows: Vec<Row> = (1..=1_000u32)
        .step_by(10)
        .map(|k| {
            let k = f64::from(k);
            Row {
                param: k,
                t1: trivial_time(1000.0, &mut rng) * (k / 1000.0).max(0.01),
                t2: efficient_time(k.max(2.0), &mut rng),
            }
        })
        .collect();
    write_file(&args.out_dir, "test3_2.csv", "k", &rows)?;

    // 3.3: r = 0.001, n = 1..10000 step 100
    let rows: Vec<Row> = (1..=10_000u32)
        .step_by(100)
        .map(|n| {
            let n = f64::from(n);
            Row {
                param: n,
                t1: trivial_time(n, &mut rng) * 0.5,
                t2: efficient_time(n, &mut rng) * 0.5,
            }
        })
        .collect();
    write_file(&args.out_dir, "test3_3.csv", "n", &rows)?;

    // 3.4: n = 10000, r = 0.0001..0.01 step 0.0001; longer segments meet
    // more neighbours in the sweep.
    let rows: Vec<Row> = (1..=100u32)
        .map(|i| {
            let r = f64::from(i) / 10_000.0;
            Row {
                param: r,
                t1: trivial_time(10_000.0, &mut rng) * 0.5,
                t2: efficient_time(10_000.0, &mut rng) * (1.0 + 50.0 * r),
            }
        })
        .collect();
    write_file(&args.out_dir, "test3_4.csv", "r", &rows)?;

    Ok(())
}
