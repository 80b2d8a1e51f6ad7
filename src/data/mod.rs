/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///     test3_*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → MeasurementTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ FileAnalysis  │  table + T1/T2 ratio series + label
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
