//! Render progress bar.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use parscale_report::interfaces::RenderReporter;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} figures {msg}";

/// Progress bar over a batch of figures, drawn on stderr.
pub struct CLIRenderProgress {
    bar: ProgressBar,
}

impl CLIRenderProgress {
    /// Create a progress bar; a quiet one never draws.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(0);
            let style = ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-");
            bar.set_style(style);
            bar
        };
        Self { bar }
    }
}

impl RenderReporter for CLIRenderProgress {
    fn started(&self, total: usize) {
        self.bar.reset();
        self.bar.set_length(u64::try_from(total).unwrap_or(u64::MAX));
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn figure_done(&self, stem: &str, ok: bool) {
        if !ok {
            self.bar.println(format!("failed: {stem}"));
        }
        self.bar.set_message(stem.to_string());
        self.bar.inc(1);
    }

    fn finished(&self) {
        self.bar.finish_and_clear();
    }
}
