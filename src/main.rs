mod app;
mod charts;
mod color;
mod config;
mod data;
mod report;
mod session;
mod state;
mod stats;
mod ui;

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use app::RustyRatioApp;
use clap::Parser;
use config::{Cli, RunConfig};
use eframe::egui;
use session::Session;
use state::AppState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RunConfig::from(Cli::parse());

    let session = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let session = Session::run(&config, &mut out).context("writing report")?;
        out.flush().context("writing report")?;
        session
    };

    if !session.skipped.is_empty() {
        log::info!("{} file(s) skipped", session.skipped.len());
    }

    if !config.show_charts {
        return Ok(());
    }
    if session.analyses.is_empty() {
        log::warn!("No benchmark file could be loaded; nothing to chart");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    let state = AppState::from_session(session);
    eframe::run_native(
        "Rusty Ratio – Benchmark Analyzer",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyRatioApp::new(state)))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))
}
