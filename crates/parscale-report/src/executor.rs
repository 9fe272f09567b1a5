//! Parallel figure rendering.

use std::path::Path;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::charts::Figure;
use crate::interfaces::{ChartRenderer, RenderOutcome, RenderReporter};

/// Render every figure into `out_dir`.
///
/// Outcomes come back in the order of `figures`. A failing figure does not
/// stop the others.
pub fn render_figures(
    renderer: &dyn ChartRenderer,
    figures: &[Figure],
    out_dir: &Path,
    reporter: &dyn RenderReporter,
) -> Vec<RenderOutcome> {
    let start = Instant::now();
    reporter.started(figures.len());

    let render_one = |figure: &Figure| {
        let result = renderer.render(figure, out_dir);
        match &result {
            Ok(path) => tracing::debug!(stem = %figure.stem, path = %path.display(), "figure written"),
            Err(e) => tracing::warn!(stem = %figure.stem, error = %e, "figure failed"),
        }
        reporter.figure_done(&figure.stem, result.is_ok());
        RenderOutcome {
            stem: figure.stem.clone(),
            result,
        }
    };

    let outcomes: Vec<RenderOutcome> = if figures.len() == 1 {
        // Single figure: render directly
        vec![render_one(&figures[0])]
    } else {
        figures.par_iter().map(render_one).collect()
    };

    reporter.finished();
    tracing::info!(
        figures = figures.len(),
        failed = failed_count(&outcomes),
        elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "rendering finished"
    );
    outcomes
}

/// Number of figures that failed to render.
#[must_use]
pub fn failed_count(outcomes: &[RenderOutcome]) -> usize {
    outcomes.iter().filter(|o| !o.is_ok()).count()
}
