//! Chart descriptions built from analyses, independent of rendering.
//!
//! The UI layer turns these into `egui_plot` items. Log-scale charts store
//! `log10` of their Y values; the renderer formats the ticks back.

use eframe::egui::Color32;

use crate::color::{self, MEAN_LINE_COLOR, RATIO_COLOR, T1_COLOR, T2_COLOR};
use crate::data::model::FileAnalysis;

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Map a data value onto the axis. `None` if it cannot be drawn.
    pub fn project(self, y: f64) -> Option<f64> {
        match self {
            Scale::Linear => y.is_finite().then_some(y),
            Scale::Log => (y > 0.0 && y.is_finite()).then(|| y.log10()),
        }
    }

    /// Inverse of [`Scale::project`].
    pub fn unproject(self, v: f64) -> f64 {
        match self {
            Scale::Linear => v,
            Scale::Log => 10f64.powf(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

const FILE_STROKES: [(Stroke, Marker); 4] = [
    (Stroke::Solid, Marker::Circle),
    (Stroke::Dashed, Marker::Square),
    (Stroke::DashDot, Marker::Triangle),
    (Stroke::Dotted, Marker::Diamond),
];

/// One polyline with markers.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: Color32,
    pub stroke: Stroke,
    pub marker: Marker,
    /// Points already projected onto the chart's Y scale.
    pub points: Vec<[f64; 2]>,
}

impl Series {
    fn new(name: impl Into<String>, color: Color32, marker: Marker) -> Self {
        Self {
            name: name.into(),
            color,
            stroke: Stroke::Solid,
            marker,
            points: Vec::new(),
        }
    }

    fn with_points(mut self, xs: &[f64], ys: &[f64], scale: Scale) -> Self {
        self.points = xs
            .iter()
            .zip(ys)
            .filter_map(|(&x, &y)| Some([x, scale.project(y)?]))
            .collect();
        self
    }
}

/// Horizontal dashed line across the whole chart.
#[derive(Debug, Clone)]
pub struct ReferenceLine {
    pub y: f64,
    pub name: String,
    pub color: Color32,
}

#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: Scale,
    pub series: Vec<Series>,
    pub reference: Option<ReferenceLine>,
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

// ---------------------------------------------------------------------------
// Per-file charts
// ---------------------------------------------------------------------------

/// T1 and T2 against the parameter.
pub fn time_chart(a: &FileAnalysis, scale: Scale) -> LineChart {
    let xs = a.table.xs();
    let title = match scale {
        Scale::Log => format!("{}: running time of both algorithms ({})", a.label, a.file_name()),
        Scale::Linear => format!("{}: running time (linear scale)", a.label),
    };
    LineChart {
        title,
        x_label: a.param().axis_label(),
        y_label: "Running time (seconds)".to_string(),
        y_scale: scale,
        series: vec![
            Series::new("T1 (trivial algorithm)", T1_COLOR, Marker::Circle)
                .with_points(&xs, &a.table.t1(), scale),
            Series::new("T2 (efficient algorithm)", T2_COLOR, Marker::Square)
                .with_points(&xs, &a.table.t2(), scale),
        ],
        reference: None,
    }
}

/// Ratio series with a reference line at its mean.
pub fn ratio_chart(a: &FileAnalysis) -> LineChart {
    let mean = a.mean_ratio();
    LineChart {
        title: format!("{}: T1/T2 running time ratio", a.label),
        x_label: a.param().axis_label(),
        y_label: "T1/T2 ratio".to_string(),
        y_scale: Scale::Linear,
        series: vec![Series::new("T1/T2 ratio", RATIO_COLOR, Marker::Triangle).with_points(
            &a.table.xs(),
            &a.ratio,
            Scale::Linear,
        )],
        reference: mean.is_finite().then(|| ReferenceLine {
            y: mean,
            name: format!("Mean ratio: {mean:.1}"),
            color: MEAN_LINE_COLOR,
        }),
    }
}

/// The three charts drawn for every loaded file.
#[derive(Debug, Clone)]
pub struct FileCharts {
    pub log_time: LineChart,
    pub linear_time: LineChart,
    pub ratio: LineChart,
}

impl FileCharts {
    pub fn build(a: &FileAnalysis) -> Self {
        Self {
            log_time: time_chart(a, Scale::Log),
            linear_time: time_chart(a, Scale::Linear),
            ratio: ratio_chart(a),
        }
    }
}

// ---------------------------------------------------------------------------
// Cross-file comparison
// ---------------------------------------------------------------------------

/// The 2×2 comparison grid.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub t1: LineChart,
    pub t2: LineChart,
    pub ratio: LineChart,
    pub mean_ratios: BarChart,
}

impl Comparison {
    /// Build the grid; `None` unless at least two analyses are given.
    pub fn build(analyses: &[FileAnalysis]) -> Option<Self> {
        if analyses.len() < 2 {
            return None;
        }
        let colors = color::file_colors(analyses.len());

        let series_for = |prefix: &str, pick: &dyn Fn(&FileAnalysis) -> Vec<f64>, scale: Scale| {
            analyses
                .iter()
                .enumerate()
                .map(|(i, a)| {
                    let (stroke, marker) = FILE_STROKES[i % FILE_STROKES.len()];
                    let mut s = Series::new(format!("{prefix} - {}", a.label), colors[i], marker)
                        .with_points(&a.table.xs(), &pick(a), scale);
                    s.stroke = stroke;
                    s
                })
                .collect::<Vec<_>>()
        };

        let chart = |title: &str, y_label: &str, y_scale: Scale, series: Vec<Series>| LineChart {
            title: title.to_string(),
            x_label: "Parameter".to_string(),
            y_label: y_label.to_string(),
            y_scale,
            series,
            reference: None,
        };

        Some(Self {
            t1: chart(
                "T1 (trivial algorithm) across files",
                "T1 (seconds)",
                Scale::Log,
                series_for("T1", &|a| a.table.t1(), Scale::Log),
            ),
            t2: chart(
                "T2 (efficient algorithm) across files",
                "T2 (seconds)",
                Scale::Log,
                series_for("T2", &|a| a.table.t2(), Scale::Log),
            ),
            ratio: chart(
                "T1/T2 ratio across files",
                "T1/T2 ratio",
                Scale::Linear,
                series_for("T1/T2", &|a| a.ratio.clone(), Scale::Linear),
            ),
            mean_ratios: BarChart {
                title: "Mean efficiency per file".to_string(),
                y_label: "Mean T1/T2 ratio".to_string(),
                bars: analyses
                    .iter()
                    .zip(&colors)
                    .map(|(a, &color)| Bar {
                        label: a.label.clone(),
                        value: a.mean_ratio(),
                        color,
                    })
                    .collect(),
            },
        })
    }
}
