//! Constants shared by the metrics, reports and the CLI.

/// Efficiency (in percent) of ideal linear scaling.
pub const IDEAL_EFFICIENCY: f64 = 100.0;

/// Overhead factor at which two strategies perform identically.
pub const PARITY_FACTOR: f64 = 1.0;

/// Efficiency (in percent) at or above which scaling is considered good.
pub const GOOD_EFFICIENCY: f64 = 60.0;

/// Efficiency (in percent) at or above which scaling is considered fair.
pub const FAIR_EFFICIENCY: f64 = 50.0;

/// Default axis wording for the worker-count dimension.
pub const DEFAULT_WORKER_LABEL: &str = "Threads";

/// Default name of the throughput metric.
pub const DEFAULT_THROUGHPUT_LABEL: &str = "Throughput";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, rendering).
    pub const ERROR_GENERIC: i32 = 1;
    /// Two series compared against each other were not aligned.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid input data or configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
