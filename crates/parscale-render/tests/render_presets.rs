//! Renders every built-in experiment to SVG.

use parscale_core::presets;
use parscale_render::{PlottersRenderer, RenderProfile};
use parscale_report::{analyze, failed_count, plan_figures, render_figures};
use parscale_report::interfaces::NullRenderReporter;
use tempfile::TempDir;

fn small_profile() -> RenderProfile {
    RenderProfile {
        width: 400,
        height: 300,
        ..RenderProfile::default()
    }
}

#[test]
fn every_preset_renders() {
    let dir = TempDir::new().unwrap();
    let renderer = PlottersRenderer::new(small_profile()).unwrap();

    for experiment in presets::all() {
        let report = analyze(&experiment).unwrap();
        let figures = plan_figures(&report);
        let outcomes = render_figures(&renderer, &figures, dir.path(), &NullRenderReporter);

        assert_eq!(failed_count(&outcomes), 0, "{}", experiment.name);
        for outcome in &outcomes {
            let path = outcome.result.as_ref().unwrap();
            let len = std::fs::metadata(path).unwrap().len();
            assert!(len > 0, "{} is empty", path.display());
        }
    }
}

#[test]
fn file_names_follow_stems() {
    let dir = TempDir::new().unwrap();
    let renderer = PlottersRenderer::new(small_profile()).unwrap();
    let report = analyze(&presets::find("triad").unwrap()).unwrap();
    let outcomes = render_figures(
        &renderer,
        &plan_figures(&report),
        dir.path(),
        &NullRenderReporter,
    );

    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "triad_analysis.svg",
            "triad_efficiency.svg",
            "triad_speedup.svg",
            "triad_throughput.svg",
            "triad_time.svg",
        ]
    );
    assert_eq!(outcomes.len(), 5);
}

#[test]
fn annotations_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let profile = RenderProfile {
        annotate: false,
        ..small_profile()
    };
    let renderer = PlottersRenderer::new(profile).unwrap();
    let report = analyze(&presets::find("vector-add").unwrap()).unwrap();
    let figures = plan_figures(&report);
    let time = figures.iter().find(|f| f.stem == "vector-add_time").unwrap();

    let outcomes = render_figures(&renderer, std::slice::from_ref(time), dir.path(), &NullRenderReporter);
    let svg = std::fs::read_to_string(outcomes[0].result.as_ref().unwrap()).unwrap();
    assert!(!svg.contains("0.471s"));
}

#[test]
fn speedup_chart_shows_efficiency_callouts() {
    let dir = TempDir::new().unwrap();
    let renderer = PlottersRenderer::new(small_profile()).unwrap();
    let report = analyze(&presets::find("triad").unwrap()).unwrap();
    let figures = plan_figures(&report);
    let speedup = figures.iter().find(|f| f.stem == "triad_speedup").unwrap();

    let outcomes = render_figures(&renderer, std::slice::from_ref(speedup), dir.path(), &NullRenderReporter);
    let svg = std::fs::read_to_string(outcomes[0].result.as_ref().unwrap()).unwrap();
    assert!(svg.contains("Efficiency: 53.5%"));
    assert!(svg.contains("Efficiency: 25.4%"));
}
