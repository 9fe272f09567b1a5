//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use parscale_render::{ImageFormat, RenderProfile};

/// parscale: speedup, efficiency and overhead analysis of parallel timing runs.
#[derive(Parser, Debug)]
#[command(name = "parscale", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Built-in experiment to analyze (repeatable).
    #[arg(short, long = "preset", value_name = "NAME")]
    pub presets: Vec<String>,

    /// Analyze every built-in experiment.
    #[arg(long)]
    pub all_presets: bool,

    /// JSON experiment file to analyze (repeatable).
    #[arg(short, long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// List the built-in experiments and exit.
    #[arg(long)]
    pub list_presets: bool,

    /// Directory the charts are written to.
    #[arg(short, long, default_value = "plots", env = "PARSCALE_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Image format: svg, or png when built with the `png` feature.
    #[arg(long, env = "PARSCALE_FORMAT")]
    pub format: Option<ImageFormat>,

    /// Width of one chart panel in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Height of one chart panel in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Do not print values next to data points.
    #[arg(long)]
    pub no_annotate: bool,

    /// Print the analysis without writing charts.
    #[arg(long)]
    pub no_render: bool,

    /// Print the analysis as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Save the effective render settings as the default profile.
    #[arg(long, conflicts_with = "reset_profile")]
    pub save_profile: bool,

    /// Delete the saved render profile and exit.
    #[arg(long)]
    pub reset_profile: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Render settings: command-line flags over the saved profile.
    #[must_use]
    pub fn render_profile(&self, saved: Option<RenderProfile>) -> RenderProfile {
        let mut profile = saved.unwrap_or_default();
        if let Some(format) = self.format {
            profile.format = format;
        }
        if let Some(width) = self.width {
            profile.width = width;
        }
        if let Some(height) = self.height {
            profile.height = height;
        }
        if self.no_annotate {
            profile.annotate = false;
        }
        profile
    }
}
