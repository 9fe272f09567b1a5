//! Application entry point and dispatch.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use parscale_cli::presenter::CLIReportPresenter;
use parscale_cli::progress::CLIRenderProgress;
use parscale_cli::ui;
use parscale_core::constants::exit_codes;
use parscale_core::experiment::Experiment;
use parscale_core::presets;
use parscale_render::{io, PlottersRenderer};
use parscale_report::charts::Figure;
use parscale_report::interfaces::ReportPresenter;
use parscale_report::{analyze, failed_count, plan_figures, render_figures, ExperimentReport};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        parscale_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    if config.list_presets {
        list_presets();
        return Ok(exit_codes::SUCCESS);
    }

    if config.reset_profile {
        reset_profile(config.quiet)?;
        return Ok(exit_codes::SUCCESS);
    }

    let experiments = load_experiments(config)?;
    let reports = experiments
        .iter()
        .map(|e| analyze(e).with_context(|| format!("analyzing {}", e.name)))
        .collect::<Result<Vec<_>>>()?;

    let presenter = CLIReportPresenter::new(config.verbose, config.quiet || config.json);
    if config.json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            presenter.present_report(report);
        }
    }

    if config.no_render {
        return Ok(exit_codes::SUCCESS);
    }
    render(config, &reports, &presenter)?;
    Ok(exit_codes::SUCCESS)
}

fn list_presets() {
    for experiment in presets::all() {
        println!("{:<24} {}", experiment.name, experiment.title);
    }
}

fn reset_profile(quiet: bool) -> Result<()> {
    let removed = io::delete_profile().context("deleting render profile")?;
    if !quiet {
        if removed {
            ui::print_success("render profile removed");
        } else {
            println!("no saved render profile");
        }
    }
    Ok(())
}

fn print_json(reports: &[ExperimentReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).context("serializing reports")?;
    println!("{json}");
    Ok(())
}

/// Presets first, then input files, in the order given; later duplicates of
/// an experiment name are skipped.
fn load_experiments(config: &AppConfig) -> Result<Vec<Experiment>> {
    let mut experiments = Vec::new();
    if config.all_presets {
        experiments.extend(presets::all());
    }
    for name in &config.presets {
        let experiment = presets::find(name).ok_or_else(|| AppError::UnknownPreset(name.clone()))?;
        experiments.push(experiment);
    }
    for path in &config.inputs {
        experiments.push(load_experiment_file(path)?);
    }

    let mut seen = HashSet::new();
    experiments.retain(|e| {
        let fresh = seen.insert(e.name.clone());
        if !fresh {
            tracing::warn!(experiment = %e.name, "duplicate experiment skipped");
        }
        fresh
    });

    if experiments.is_empty() {
        return Err(AppError::NoExperiments.into());
    }
    Ok(experiments)
}

fn load_experiment_file(path: &Path) -> Result<Experiment> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let experiment =
        Experiment::from_json(&json).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(experiment = %experiment.name, path = %path.display(), "loaded experiment");
    Ok(experiment)
}

fn render(
    config: &AppConfig,
    reports: &[ExperimentReport],
    presenter: &dyn ReportPresenter,
) -> Result<()> {
    let profile = config.render_profile(io::load_validated_profile());
    if !profile.is_valid() {
        return Err(AppError::InvalidSize {
            width: profile.width,
            height: profile.height,
        }
        .into());
    }
    let renderer = PlottersRenderer::new(profile.clone())?;

    if config.save_profile {
        let path = io::save_profile(&profile).context("saving render profile")?;
        if !(config.quiet || config.json) {
            ui::print_success(&format!("profile saved to {}", path.display()));
        }
    }

    let figures: Vec<Figure> = reports.iter().flat_map(plan_figures).collect();
    let progress = CLIRenderProgress::new(config.quiet || config.json);
    let outcomes = render_figures(&renderer, &figures, &config.out_dir, &progress);
    presenter.present_rendered(&outcomes);

    let failed = failed_count(&outcomes);
    if failed > 0 {
        return Err(AppError::RenderFailed(failed).into());
    }
    Ok(())
}
