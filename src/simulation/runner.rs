//! Simulation runs
//!
//! A run takes one batch from start to finish against a clean access history:
//! reset, evaluate in chronological order, summarize. Each runner owns its
//! evaluator; the policy table is shared read-only through an `Arc`, so
//! independent runs can proceed on separate threads with separate runners.

use crate::access::{AccessEvaluator, AccessRequest};
use crate::policy::PolicyTable;
use crate::simulation::{SimulationReport, SimulationRequest};
use crate::types::RunId;
use std::sync::Arc;
use tracing::{info, info_span};

/// Runs batches one at a time against a reusable evaluator
#[derive(Debug)]
pub struct SimulationRunner {
    /// Evaluator whose history is cleared before every run
    evaluator: AccessEvaluator,
    /// Number of runs completed by this runner
    runs_completed: usize,
}

impl SimulationRunner {
    /// Create a runner over a shared policy table
    pub fn new(policies: Arc<PolicyTable>) -> Self {
        info!("Initializing simulation runner with {} room policies", policies.room_count());
        Self { evaluator: AccessEvaluator::new(policies), runs_completed: 0 }
    }

    /// The policy table used for every run
    pub fn policies(&self) -> &PolicyTable {
        self.evaluator.policies()
    }

    /// Number of runs completed so far
    pub fn runs_completed(&self) -> usize {
        self.runs_completed
    }

    /// Run a validated batch
    pub fn run(&mut self, batch: &SimulationRequest) -> SimulationReport {
        self.run_requests(&batch.employees)
    }

    /// Run a slice of requests from a clean access history
    pub fn run_requests(&mut self, requests: &[AccessRequest]) -> SimulationReport {
        let run_id = RunId::new();
        let span = info_span!("simulation_run", run_id = %run_id, request_count = requests.len());
        let _enter = span.enter();

        // No history may leak in from an earlier run
        self.evaluator.reset();
        let results = self.evaluator.evaluate_batch(requests);
        self.runs_completed += 1;

        let report = SimulationReport::new(run_id, results);
        info!(
            granted = report.summary.granted_requests,
            denied = report.summary.denied_requests,
            success_rate = %report.summary.success_rate,
            "Simulation run complete"
        );
        report
    }
}

/// Run one batch against a fresh evaluator
pub fn run_batch(policies: Arc<PolicyTable>, requests: &[AccessRequest]) -> SimulationReport {
    SimulationRunner::new(policies).run_requests(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, level: i64, time: &str, room: &str) -> AccessRequest {
        AccessRequest::new(id, level, time.parse().unwrap(), room)
    }

    #[test]
    fn test_runs_do_not_share_history() {
        let mut runner = SimulationRunner::new(Arc::new(PolicyTable::default()));

        let first = runner.run_requests(&[request("EMP001", 2, "09:15", "ServerRoom")]);
        assert!(first.results[0].is_granted());

        // Would be in cooldown if the first run's grant carried over
        let second = runner.run_requests(&[request("EMP001", 2, "09:20", "ServerRoom")]);
        assert!(second.results[0].is_granted());

        assert_eq!(runner.runs_completed(), 2);
        assert_ne!(first.run_id, second.run_id);
    }

    #[test]
    fn test_run_batch_summary() {
        let report = run_batch(
            Arc::new(PolicyTable::default()),
            &[
                request("EMP001", 2, "09:15", "ServerRoom"),
                request("EMP002", 1, "09:30", "Vault"),
            ],
        );

        assert_eq!(report.summary.total_requests, 2);
        assert_eq!(report.summary.granted_requests, 1);
        assert_eq!(report.summary.denied_requests, 1);
        assert_eq!(report.summary.success_rate, "50.0%");
    }

    #[test]
    fn test_run_from_validated_batch() {
        let batch = SimulationRequest::from_json(
            r#"{"employees": [{"id": "EMP001", "access_level": 1, "request_time": "08:00", "room": "R&D Lab"}]}"#,
        )
        .unwrap();

        let mut runner = SimulationRunner::new(Arc::new(PolicyTable::default()));
        let report = runner.run(&batch);

        assert_eq!(report.results.len(), 1);
        assert!(report.results[0].is_granted());
    }
}
