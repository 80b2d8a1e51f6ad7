use crate::charts::{Comparison, FileCharts, LineChart};
use crate::data::model::FileAnalysis;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Chart selection
// ---------------------------------------------------------------------------

/// One chart the viewer can show. File charts carry the analysis index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    LogTime(usize),
    LinearTime(usize),
    Ratio(usize),
    Comparison,
}

impl ChartView {
    pub fn short_name(&self) -> &'static str {
        match self {
            ChartView::LogTime(_) => "Running time (log scale)",
            ChartView::LinearTime(_) => "Running time (linear scale)",
            ChartView::Ratio(_) => "T1/T2 ratio",
            ChartView::Comparison => "Comparison of all files",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Loaded files, in the order they were analyzed.
    pub analyses: Vec<FileAnalysis>,

    /// Per-file charts, index-aligned with `analyses`.
    pub charts: Vec<FileCharts>,

    /// Cross-file grid; present only when two or more files loaded.
    pub comparison: Option<Comparison>,

    /// Chart shown in the central panel.
    pub selected: ChartView,
}

impl AppState {
    /// Build every chart for a finished analysis run.
    pub fn from_session(session: Session) -> Self {
        let comparison = session.comparison();
        let charts = session.analyses.iter().map(FileCharts::build).collect();
        let selected = if session.analyses.is_empty() {
            ChartView::Comparison
        } else {
            ChartView::LogTime(0)
        };
        Self {
            analyses: session.analyses,
            charts,
            comparison,
            selected,
        }
    }

    /// All charts in display order: three per file, then the comparison.
    pub fn views(&self) -> Vec<ChartView> {
        let mut views: Vec<ChartView> = (0..self.analyses.len())
            .flat_map(|i| {
                [
                    ChartView::LogTime(i),
                    ChartView::LinearTime(i),
                    ChartView::Ratio(i),
                ]
            })
            .collect();
        if self.comparison.is_some() {
            views.push(ChartView::Comparison);
        }
        views
    }

    /// The line chart behind a per-file view.
    pub fn line_chart(&self, view: ChartView) -> Option<&LineChart> {
        match view {
            ChartView::LogTime(i) => self.charts.get(i).map(|c| &c.log_time),
            ChartView::LinearTime(i) => self.charts.get(i).map(|c| &c.linear_time),
            ChartView::Ratio(i) => self.charts.get(i).map(|c| &c.ratio),
            ChartView::Comparison => None,
        }
    }

    /// Step forward (`+1`) or backward (`-1`) through [`AppState::views`],
    /// wrapping at both ends.
    pub fn step(&mut self, delta: isize) {
        let views = self.views();
        if views.is_empty() {
            return;
        }
        let pos = views.iter().position(|v| *v == self.selected).unwrap_or(0);
        let len = views.len() as isize;
        let next = (pos as isize + delta).rem_euclid(len) as usize;
        self.selected = views[next];
    }
}
