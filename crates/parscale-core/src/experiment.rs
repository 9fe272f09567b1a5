//! Experiment descriptions: one or two run series plus the metadata needed to
//! analyze and label them.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_THROUGHPUT_LABEL, DEFAULT_WORKER_LABEL};
use crate::metrics::MetricsError;
use crate::series::RunSeries;

/// Amount of work done by every run of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Work per run, in `unit`.
    pub size: f64,
    /// Unit of work, e.g. `"M ops"` or `"GB"`.
    pub unit: String,
    /// Name of the rate metric, e.g. `"Throughput"` or `"Memory Bandwidth"`.
    #[serde(default = "default_throughput_label")]
    pub label: String,
}

impl Workload {
    #[must_use]
    pub fn new(size: f64, unit: impl Into<String>) -> Self {
        Self {
            size,
            unit: unit.into(),
            label: DEFAULT_THROUGHPUT_LABEL.to_string(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Unit of the rate, e.g. `"GB/s"`.
    #[must_use]
    pub fn rate_unit(&self) -> String {
        format!("{}/s", self.unit)
    }
}

/// A run series with a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub label: String,
    pub run: RunSeries,
}

impl LabeledSeries {
    #[must_use]
    pub fn new(label: impl Into<String>, run: RunSeries) -> Self {
        Self {
            label: label.into(),
            run,
        }
    }
}

/// What was measured and how it should be analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExperimentKind {
    /// A single strong-scaling run, optionally with a known workload.
    Scaling {
        run: RunSeries,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        workload: Option<Workload>,
    },
    /// Strong scaling (fixed work) next to weak scaling (work grows with `p`).
    StrongWeak { strong: RunSeries, weak: RunSeries },
    /// The same configuration under two strategies. Overheads are computed as
    /// `subject` relative to `reference`.
    Comparison {
        subject: LabeledSeries,
        reference: LabeledSeries,
    },
}

/// A named experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Identifier, also used as the prefix of rendered file names.
    pub name: String,
    /// Chart title prefix.
    pub title: String,
    /// Axis wording for the worker count ("Threads", "Cores").
    #[serde(default = "default_worker_label")]
    pub worker_label: String,
    #[serde(flatten)]
    pub kind: ExperimentKind,
}

fn default_worker_label() -> String {
    DEFAULT_WORKER_LABEL.to_string()
}

fn default_throughput_label() -> String {
    DEFAULT_THROUGHPUT_LABEL.to_string()
}

impl Experiment {
    /// Parse and validate an experiment from JSON.
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        let experiment: Self =
            serde_json::from_str(json).map_err(|e| MetricsError::InvalidInput(e.to_string()))?;
        experiment.validate()?;
        tracing::debug!(name = %experiment.name, "parsed experiment");
        Ok(experiment)
    }

    /// Check the name is usable as a file-name prefix.
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.name.is_empty() {
            return Err(MetricsError::InvalidInput(
                "experiment name is empty".into(),
            ));
        }
        if let Some(c) = self
            .name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(MetricsError::InvalidInput(format!(
                "experiment name {:?} contains {c:?}; use letters, digits, '-' or '_'",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALING_JSON: &str = r#"{
        "name": "map-ops",
        "title": "Map",
        "kind": "scaling",
        "run": [
            {"workers": 1, "seconds": 0.451},
            {"workers": 2, "seconds": 0.143}
        ],
        "workload": {"size": 100, "unit": "M ops"}
    }"#;

    #[test]
    fn parse_scaling() {
        let exp = Experiment::from_json(SCALING_JSON).unwrap();
        assert_eq!(exp.name, "map-ops");
        assert_eq!(exp.worker_label, DEFAULT_WORKER_LABEL);
        match exp.kind {
            ExperimentKind::Scaling { run, workload } => {
                assert_eq!(run.len(), 2);
                let workload = workload.unwrap();
                assert_eq!(workload.rate_unit(), "M ops/s");
                assert_eq!(workload.label, DEFAULT_THROUGHPUT_LABEL);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn parse_comparison() {
        let json = r#"{
            "name": "sync",
            "title": "Sync",
            "worker_label": "Cores",
            "kind": "comparison",
            "subject": {"label": "Critical", "run": [{"workers": 1, "seconds": 0.16}]},
            "reference": {"label": "Reduction", "run": [{"workers": 1, "seconds": 0.021}]}
        }"#;
        let exp = Experiment::from_json(json).unwrap();
        assert_eq!(exp.worker_label, "Cores");
        assert!(matches!(exp.kind, ExperimentKind::Comparison { .. }));
    }

    #[test]
    fn parse_rejects_invalid_series() {
        let json = r#"{
            "name": "bad",
            "title": "Bad",
            "kind": "scaling",
            "run": [{"workers": 1, "seconds": 0}]
        }"#;
        let err = Experiment::from_json(json).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput(_)));
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let json = r#"{"name": "x", "title": "X", "kind": "histogram"}"#;
        assert!(Experiment::from_json(json).is_err());
    }

    #[test]
    fn validate_rejects_path_characters() {
        let mut exp = Experiment::from_json(SCALING_JSON).unwrap();
        exp.name = "../escape".into();
        assert!(exp.validate().is_err());
        exp.name = String::new();
        assert!(exp.validate().is_err());
    }

    #[test]
    fn serialization_round_trip() {
        let exp = Experiment::from_json(SCALING_JSON).unwrap();
        let json = serde_json::to_string(&exp).unwrap();
        assert_eq!(Experiment::from_json(&json).unwrap(), exp);
    }

    #[test]
    fn workload_label() {
        let w = Workload::new(2.4, "GB").with_label("Memory Bandwidth");
        assert_eq!(w.label, "Memory Bandwidth");
        assert_eq!(w.rate_unit(), "GB/s");
    }
}
