//! Error handling and exit codes.

use parscale_core::constants::exit_codes;
use parscale_core::metrics::MetricsError;
use parscale_report::interfaces::RenderError;

/// Application-level failures that are not metric or render errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unknown preset: {0} (see --list-presets)")]
    UnknownPreset(String),

    #[error("nothing to analyze: pass --preset, --all-presets or --input")]
    NoExperiments,

    #[error("invalid figure size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("{0} figure(s) failed to render")]
    RenderFailed(usize),
}

/// Exit code for a metrics error.
pub fn handle_error(err: &MetricsError) -> i32 {
    match err {
        MetricsError::InvalidInput(_) => exit_codes::ERROR_CONFIG,
        MetricsError::MismatchedSeries(_) => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<MetricsError>() {
            return handle_error(e);
        }
        if let Some(e) = cause.downcast_ref::<AppError>() {
            return match e {
                AppError::UnknownPreset(_) | AppError::NoExperiments | AppError::InvalidSize { .. } => {
                    exit_codes::ERROR_CONFIG
                }
                AppError::RenderFailed(_) => exit_codes::ERROR_GENERIC,
            };
        }
        if let Some(RenderError::UnsupportedFormat(_)) = cause.downcast_ref::<RenderError>() {
            return exit_codes::ERROR_CONFIG;
        }
    }
    exit_codes::ERROR_GENERIC
}
