//! egui rendering of the chart viewer.

pub mod panels;
pub mod plot;
