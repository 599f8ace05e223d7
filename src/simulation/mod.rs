//! Batch runs, reporting and error handling
//!
//! # Overview
//!
//! - **SimulationRequest**: validated batch of access requests parsed from JSON
//! - **SimulationRunner**: resets, evaluates and summarizes one batch per run
//! - **SimulationReport**: ordered decisions plus summary, rendered as JSON or CSV
//! - **SimulationSummary**: counts, success rate and denial reason histogram
//! - **SimulationError**: error type for ingestion, policies and I/O
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use badge_access_evaluator::policy::PolicyTable;
//! use badge_access_evaluator::simulation::*;
//! use std::sync::Arc;
//!
//! let batch = SimulationRequest::from_json(r#"{"employees": [
//!     {"id": "EMP001", "access_level": 2, "request_time": "09:15", "room": "ServerRoom"},
//!     {"id": "EMP002", "access_level": 1, "request_time": "09:30", "room": "Vault"}
//! ]}"#).unwrap();
//!
//! let mut runner = SimulationRunner::new(Arc::new(PolicyTable::default()));
//! let report = runner.run(&batch);
//!
//! assert_eq!(report.summary.success_rate, "50.0%");
//! ```

pub mod batch;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod statistics;

// Re-export all public types for convenience
pub use batch::*;
pub use error::*;
pub use logging::*;
pub use report::*;
pub use runner::*;
pub use statistics::*;
