use std::ops::RangeInclusive;

use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, HLine, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint,
    PlotPoints, Points, Text,
};

use crate::charts::{self, Comparison, LineChart, Marker, Scale, Stroke};
use crate::state::{AppState, ChartView};

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the selected chart in the central panel.
pub fn selected_chart(ui: &mut Ui, state: &AppState) {
    match state.selected {
        ChartView::Comparison => match &state.comparison {
            Some(cmp) => comparison_grid(ui, cmp),
            None => {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Comparison needs at least two loaded files");
                });
            }
        },
        view => {
            if let Some(chart) = state.line_chart(view) {
                ui.heading(&chart.title);
                line_chart(ui, &format!("{view:?}"), chart, None);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Line charts
// ---------------------------------------------------------------------------

fn marker_shape(marker: Marker) -> MarkerShape {
    match marker {
        Marker::Circle => MarkerShape::Circle,
        Marker::Square => MarkerShape::Square,
        Marker::Triangle => MarkerShape::Up,
        Marker::Diamond => MarkerShape::Diamond,
    }
}

fn line_style(stroke: Stroke) -> LineStyle {
    match stroke {
        Stroke::Solid => LineStyle::Solid,
        Stroke::Dashed => LineStyle::dashed_loose(),
        Stroke::DashDot => LineStyle::dashed_dense(),
        Stroke::Dotted => LineStyle::dotted_dense(),
    }
}

/// Tick label for a log10-projected axis value.
fn log_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("1e{}", v.round() as i32)
    } else {
        format!("{:.1e}", Scale::Log.unproject(v))
    }
}

/// Draw one line chart. `height` of `None` fills the available space.
pub fn line_chart(ui: &mut Ui, id: &str, chart: &LineChart, height: Option<f32>) {
    let scale = chart.y_scale;

    let mut plot = Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name: &str, value: &PlotPoint| {
            let y = scale.unproject(value.y);
            if name.is_empty() {
                format!("x = {}\ny = {y:.4e}", value.x)
            } else {
                format!("{name}\nx = {}\ny = {y:.4e}", value.x)
            }
        });
    if scale == Scale::Log {
        plot = plot.y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            log_tick(mark.value)
        });
    }
    if let Some(h) = height {
        plot = plot.height(h);
    }

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let line = Line::new(PlotPoints::from(series.points.clone()))
                .name(&series.name)
                .color(series.color)
                .style(line_style(series.stroke))
                .width(2.0);
            plot_ui.line(line);

            let points = Points::new(PlotPoints::from(series.points.clone()))
                .name(&series.name)
                .color(series.color)
                .shape(marker_shape(series.marker))
                .filled(true)
                .radius(2.5);
            plot_ui.points(points);
        }

        if let Some(reference) = &chart.reference {
            plot_ui.hline(
                HLine::new(reference.y)
                    .name(&reference.name)
                    .color(reference.color)
                    .style(LineStyle::dashed_loose())
                    .width(1.5),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Comparison grid
// ---------------------------------------------------------------------------

/// 2×2 grid: T1, T2, ratio, mean ratio per file.
pub fn comparison_grid(ui: &mut Ui, cmp: &Comparison) {
    let cell_height = ((ui.available_height() - 80.0) / 2.0).max(160.0);

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].strong(&cmp.t1.title);
        line_chart(&mut cols[0], "cmp_t1", &cmp.t1, Some(cell_height));
        cols[1].strong(&cmp.t2.title);
        line_chart(&mut cols[1], "cmp_t2", &cmp.t2, Some(cell_height));
    });
    ui.separator();
    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].strong(&cmp.ratio.title);
        line_chart(&mut cols[0], "cmp_ratio", &cmp.ratio, Some(cell_height));
        cols[1].strong(&cmp.mean_ratios.title);
        mean_ratio_bars(&mut cols[1], &cmp.mean_ratios, cell_height);
    });
}

/// Bars with a finite value, paired with their slot on the x axis. A file
/// without a defined mean ratio leaves its slot empty.
fn drawable_bars(chart: &charts::BarChart) -> Vec<(usize, &charts::Bar)> {
    chart
        .bars
        .iter()
        .enumerate()
        .filter(|(_, b)| b.value.is_finite())
        .collect()
}

fn mean_ratio_bars(ui: &mut Ui, chart: &charts::BarChart, height: f32) {
    let labels: Vec<String> = chart.bars.iter().map(|b| b.label.clone()).collect();

    let drawable = drawable_bars(chart);
    let bars: Vec<Bar> = drawable
        .iter()
        .map(|&(i, b)| {
            Bar::new(i as f64, b.value)
                .name(&b.label)
                .fill(b.color.gamma_multiply(0.7))
                .width(0.6)
        })
        .collect();

    Plot::new("cmp_mean_ratio")
        .height(height)
        .y_axis_label(chart.y_label.clone())
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-9 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for &(i, b) in &drawable {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(i as f64, b.value),
                        RichText::new(format!("{:.1}x", b.value)).strong(),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}
