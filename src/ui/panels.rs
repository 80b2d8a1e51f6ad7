use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::report::fmt_param;
use crate::state::{AppState, ChartView};
use crate::stats::FileSummary;

// ---------------------------------------------------------------------------
// Left side panel – chart list
// ---------------------------------------------------------------------------

/// Render the left chart selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Charts");
    ui.separator();

    if state.analyses.is_empty() {
        ui.label("No benchmark file loaded.");
        return;
    }

    let files: Vec<String> = state.analyses.iter().map(|a| a.label.clone()).collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, label) in files.iter().enumerate() {
                egui::CollapsingHeader::new(RichText::new(label).strong())
                    .id_salt(i)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        for view in [
                            ChartView::LogTime(i),
                            ChartView::LinearTime(i),
                            ChartView::Ratio(i),
                        ] {
                            if ui
                                .selectable_label(state.selected == view, view.short_name())
                                .clicked()
                            {
                                state.selected = view;
                            }
                        }
                    });
            }

            if state.comparison.is_some() {
                ui.separator();
                let view = ChartView::Comparison;
                if ui
                    .selectable_label(state.selected == view, view.short_name())
                    .clicked()
                {
                    state.selected = view;
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("◀ Previous").clicked() {
            state.step(-1);
        }
        if ui.button("Next ▶").clicked() {
            state.step(1);
        }

        ui.separator();

        ui.label(format!("{} file(s) analyzed", state.analyses.len()));

        ui.separator();

        let views = state.views();
        if let Some(pos) = views.iter().position(|v| *v == state.selected) {
            ui.label(format!("Chart {} of {}", pos + 1, views.len()));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – statistics table
// ---------------------------------------------------------------------------

/// Per-file summary statistics, one row per loaded file.
pub fn stats_table(ui: &mut Ui, state: &AppState) {
    const HEADERS: [&str; 8] = [
        "File",
        "Param",
        "Rows",
        "Range",
        "Mean T1 (s)",
        "Mean T2 (s)",
        "Mean T1/T2",
        "Median T1/T2",
    ];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(70.0), HEADERS.len() - 1)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for a in &state.analyses {
                let s = FileSummary::compute(&a.table, &a.ratio);
                let cells = [
                    a.label.clone(),
                    a.param().to_string(),
                    s.count.to_string(),
                    format!("{} – {}", fmt_param(s.x_min), fmt_param(s.x_max)),
                    format!("{:.3e}", s.t1.mean),
                    format!("{:.3e}", s.t2.mean),
                    format!("{:.1}x", s.ratio.mean),
                    format!("{:.1}x", s.ratio_median),
                ];
                body.row(18.0, |mut row| {
                    for cell in &cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}
