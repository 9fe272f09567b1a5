//! CLI report presenter.

use parscale_report::analysis::ExperimentReport;
use parscale_report::interfaces::{RenderOutcome, ReportPresenter};

use crate::output::{format_highlight, metrics_table};
use crate::ui;

/// CLI report presenter.
pub struct CLIReportPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIReportPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ReportPresenter for CLIReportPresenter {
    fn present_report(&self, report: &ExperimentReport) {
        if self.quiet {
            return;
        }

        ui::print_header(&report.title);
        if self.verbose {
            println!("Experiment: {}", report.name);
        }
        print!("{}", metrics_table(report, self.verbose));

        if !report.highlights.is_empty() {
            println!();
            for highlight in &report.highlights {
                ui::print_highlight(
                    &highlight.label,
                    &format_highlight(highlight, &report.worker_label),
                );
            }
        }
        println!();
    }

    fn present_rendered(&self, outcomes: &[RenderOutcome]) {
        for outcome in outcomes {
            match &outcome.result {
                Ok(path) if !self.quiet => ui::print_success(&path.display().to_string()),
                Ok(_) => {}
                Err(e) => ui::print_error(&format!("{}: {e}", outcome.stem)),
            }
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
