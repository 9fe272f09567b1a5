//! # parscale-report
//!
//! Experiment analysis, figure planning, and parallel rendering behind
//! renderer and presenter traits.

pub mod analysis;
pub mod charts;
pub mod executor;
pub mod interfaces;

pub use analysis::{analyze, ExperimentReport, Highlight, ReportBody};
pub use charts::{plan_figures, Figure, Panel};
pub use executor::{failed_count, render_figures};
pub use interfaces::{ChartRenderer, RenderError, RenderOutcome, RenderReporter, ReportPresenter};
