//! Continuous connectivity prober.
//!
//! Probes two fixed targets (a local router and an external server) with
//! ICMP echo requests on a fixed interval, classifies each outcome, and
//! appends it as one JSON line to a success or failure log file.

pub mod config;
pub mod monitor;
pub mod probe;
pub mod probe_executor;
pub mod result_logger;

pub use config::MonitorConfig;
pub use monitor::Monitor;
pub use probe::{ProbeOutcome, ProbeStatus};
pub use probe_executor::ProbeExecutor;
