//! Badge Access Evaluator
//!
//! Decides whether employees may badge into rooms, given per-room policies
//! and a batch of timestamped access requests.
//!
//! # Overview
//!
//! Each room has a policy: a minimum access level, an inclusive daily
//! operating window and a cooldown between successful entries by the same
//! employee. A batch of requests is processed in chronological order and
//! every request receives a decision with a human-readable reason. The run
//! ends with a summary: totals, success rate and a histogram of denial
//! reasons.
//!
//! Rules are checked in a fixed order and the first failing rule decides:
//!
//! 1. the room must exist
//! 2. the employee's access level must meet the room's minimum
//! 3. the request time must fall within operating hours
//! 4. the employee must be outside the cooldown of their last granted entry
//!
//! Only granted requests start a cooldown.
//!
//! ## Quick Start
//!
//! ```rust
//! use badge_access_evaluator::*;
//! use std::sync::Arc;
//!
//! let policies = Arc::new(PolicyTable::default());
//! let report = run_batch(policies, &sample_requests());
//!
//! assert_eq!(report.summary.total_requests, 5);
//! assert_eq!(report.summary.granted_requests, 2);
//! assert_eq!(report.summary.success_rate, "40.0%");
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, time of day, output formats and configuration
//! - [`policy`]: Room policies and the policy table
//! - [`access`]: Requests, decisions, cooldown state and the evaluator
//! - [`simulation`]: Batch ingestion, runs, reports, errors and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Policy    │    │   Access    │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ RoomPolicy  │◄───┤ Evaluator   │
//! │ TimeOfDay   │    │ PolicyTable │    │ State       │
//! │ Config      │    │             │    │ Decision    │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                                              ▲
//!                                              │
//!                                       ┌─────────────┐
//!                                       │ Simulation  │
//!                                       │             │
//!                                       │ Runner      │
//!                                       │ Report      │
//!                                       │ Summary     │
//!                                       └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod access;
pub mod policy;
pub mod simulation;

pub mod types;

// Core types and identifiers
pub use types::{
    ConfigValidationError,
    // Identifiers
    EmployeeId,
    // Configuration
    EvaluatorConfig,
    OutputFormat,
    RoomName,
    RunId,
    // Time
    TimeOfDay,
};

// Policies
pub use policy::{PolicyTable, RoomPolicy};

// Evaluation
pub use access::{
    sample_requests, AccessEvaluator, AccessOutcome, AccessRequest, AccessState, Decision,
    DenialReason,
};

// Runs and reporting
pub use simulation::{
    run_batch, SimulationError, SimulationReport, SimulationRequest, SimulationResult,
    SimulationRunner, SimulationSummary,
};
