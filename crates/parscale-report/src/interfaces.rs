//! Collaborator interfaces: presenting reports and rendering figures.

use std::path::{Path, PathBuf};

use crate::analysis::ExperimentReport;
use crate::charts::Figure;

/// Error type for figure rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The drawing backend failed.
    #[error("backend error: {0}")]
    Backend(String),

    /// The output file or directory could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested image format is not compiled in or not known.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The figure has nothing to draw.
    #[error("figure {0} has no data")]
    EmptyFigure(String),
}

/// Trait for turning a planned figure into an image file.
pub trait ChartRenderer: Send + Sync {
    /// Render a figure into `out_dir`, returning the written path.
    fn render(&self, figure: &Figure, out_dir: &Path) -> Result<PathBuf, RenderError>;

    /// File extension of the images this renderer writes.
    fn extension(&self) -> &str;
}

/// Trait for reporting render progress to the user.
pub trait RenderReporter: Send + Sync {
    /// A batch of `total` figures is about to be rendered.
    fn started(&self, total: usize);

    /// One figure finished, successfully or not.
    fn figure_done(&self, stem: &str, ok: bool);

    /// The batch finished.
    fn finished(&self);
}

/// Trait for presenting analysis results to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present the derived metrics of one experiment.
    fn present_report(&self, report: &ExperimentReport);

    /// Present the outcome of rendering an experiment's figures.
    fn present_rendered(&self, outcomes: &[RenderOutcome]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of rendering one figure.
#[derive(Debug)]
pub struct RenderOutcome {
    /// File stem of the figure.
    pub stem: String,
    /// Written path or the failure.
    pub result: Result<PathBuf, RenderError>,
}

impl RenderOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Null render reporter (does nothing).
pub struct NullRenderReporter;

impl RenderReporter for NullRenderReporter {
    fn started(&self, _total: usize) {}
    fn figure_done(&self, _stem: &str, _ok: bool) {}
    fn finished(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reporter() {
        let reporter = NullRenderReporter;
        reporter.started(3);
        reporter.figure_done("triad_speedup", true);
        reporter.finished();
    }

    #[test]
    fn render_outcome() {
        let ok = RenderOutcome {
            stem: "triad_speedup".into(),
            result: Ok(PathBuf::from("plots/triad_speedup.svg")),
        };
        assert!(ok.is_ok());

        let failed = RenderOutcome {
            stem: "triad_speedup".into(),
            result: Err(RenderError::UnsupportedFormat("gif".into())),
        };
        assert!(!failed.is_ok());
    }

    #[test]
    fn io_error_converts() {
        let err: RenderError = std::io::Error::other("disk full").into();
        assert!(err.to_string().contains("disk full"));
    }
}
