//! Built-in experiments: OpenMP benchmark runs on 1 to 17 threads.

use crate::experiment::{Experiment, ExperimentKind, LabeledSeries, Workload};
use crate::series::RunSeries;

const WORKERS: [u32; 17] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17];

const VECTOR_ADD: [f64; 17] = [
    0.471, 0.118, 0.099, 0.095, 0.104, 0.097, 0.094, 0.086, 0.097, 0.092, 0.092, 0.087, 0.087,
    0.091, 0.087, 0.093, 0.087,
];

const MAP_OPS: [f64; 17] = [
    0.451, 0.143, 0.096, 0.089, 0.098, 0.092, 0.089, 0.101, 0.110, 0.106, 0.094, 0.089, 0.091,
    0.089, 0.095, 0.089, 0.086,
];

const STRONG: [f64; 17] = [
    1.6330, 0.6890, 0.4310, 0.3320, 0.3110, 0.2580, 0.2220, 0.2150, 0.2090, 0.2210, 0.1880,
    0.1750, 0.1950, 0.1860, 0.1720, 0.1850, 0.1820,
];

const WEAK: [f64; 17] = [
    0.3180, 0.2610, 0.2540, 0.2630, 0.2850, 0.3180, 0.3180, 0.3480, 0.3620, 0.3880, 0.3820,
    0.5130, 0.5060, 0.5460, 0.5590, 0.5800, 0.5970,
];

const CRITICAL: [f64; 17] = [
    0.160, 0.312, 0.277, 0.333, 0.457, 0.535, 0.587, 0.651, 0.671, 0.674, 0.684, 0.692, 0.714,
    0.706, 0.709, 0.708, 0.718,
];

const REDUCTION: [f64; 17] = [
    0.021, 0.014, 0.014, 0.007, 0.007, 0.009, 0.007, 0.003, 0.006, 0.009, 0.002, 0.007, 0.002,
    0.005, 0.007, 0.003, 0.005,
];

const FALSE_SHARING: [f64; 17] = [
    0.270, 0.437, 0.658, 0.894, 1.152, 1.304, 0.950, 1.484, 1.553, 1.827, 1.873, 1.839, 1.852,
    1.973, 1.874, 1.942, 2.178,
];

const PADDED: [f64; 17] = [
    0.277, 0.271, 0.286, 0.298, 0.354, 0.340, 0.333, 0.360, 0.399, 0.474, 0.464, 0.506, 0.526,
    0.560, 0.595, 0.632, 0.638,
];

const TRIAD: [f64; 17] = [
    0.419, 0.120, 0.100, 0.089, 0.104, 0.104, 0.108, 0.095, 0.087, 0.094, 0.104, 0.107, 0.093,
    0.103, 0.105, 0.088, 0.097,
];

/// Names of all built-in experiments, in presentation order.
pub const PRESET_NAMES: [&str; 6] = [
    "vector-add",
    "map-ops",
    "strong-weak",
    "critical-vs-reduction",
    "false-sharing",
    "triad",
];

/// Series from one compiled-in timing table. Every table is checked by
/// `tests::timing_tables_are_valid`, so this cannot fail.
fn literal(seconds: &[f64; 17]) -> RunSeries {
    RunSeries::from_columns(&WORKERS, seconds).expect("preset timings are valid")
}

fn experiment(name: &str, title: &str, worker_label: &str, kind: ExperimentKind) -> Experiment {
    Experiment {
        name: name.to_string(),
        title: title.to_string(),
        worker_label: worker_label.to_string(),
        kind,
    }
}

/// Look up a built-in experiment by name.
#[must_use]
pub fn find(name: &str) -> Option<Experiment> {
    let exp = match name {
        "vector-add" => experiment(
            name,
            "OpenMP Vector Addition",
            "Threads",
            ExperimentKind::Scaling {
                run: literal(&VECTOR_ADD),
                workload: None,
            },
        ),
        "map-ops" => experiment(
            name,
            "Parallel Map",
            "Threads",
            ExperimentKind::Scaling {
                run: literal(&MAP_OPS),
                workload: Some(Workload::new(100.0, "M ops")),
            },
        ),
        "strong-weak" => experiment(
            name,
            "Strong vs Weak Scaling",
            "Cores",
            ExperimentKind::StrongWeak {
                strong: literal(&STRONG),
                weak: literal(&WEAK),
            },
        ),
        "critical-vs-reduction" => experiment(
            name,
            "Critical Section vs Reduction",
            "Threads",
            ExperimentKind::Comparison {
                subject: LabeledSeries::new("Critical Section", literal(&CRITICAL)),
                reference: LabeledSeries::new("Reduction", literal(&REDUCTION)),
            },
        ),
        "false-sharing" => experiment(
            name,
            "False Sharing vs Padded",
            "Threads",
            ExperimentKind::Comparison {
                subject: LabeledSeries::new("False Sharing", literal(&FALSE_SHARING)),
                reference: LabeledSeries::new("Padded", literal(&PADDED)),
            },
        ),
        "triad" => experiment(
            name,
            "Triad Kernel",
            "Cores",
            ExperimentKind::Scaling {
                run: literal(&TRIAD),
                workload: Some(Workload::new(2.4, "GB").with_label("Memory Bandwidth")),
            },
        ),
        _ => return None,
    };
    Some(exp)
}

/// All built-in experiments.
#[must_use]
pub fn all() -> Vec<Experiment> {
    PRESET_NAMES.iter().filter_map(|name| find(name)).collect()
}
