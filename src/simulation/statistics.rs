//! Statistics collection and reporting
//!
//! This module aggregates a list of decisions into the run summary: request
//! counts, the success rate, and a histogram of denial reasons.

use crate::access::Decision;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate statistics over one run's decisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    /// Number of decisions
    pub total_requests: usize,
    /// Number of granted decisions
    pub granted_requests: usize,
    /// Number of denied decisions
    pub denied_requests: usize,
    /// Granted share as a percentage with one decimal, e.g. `"50.0%"`
    pub success_rate: String,
    /// Denied decisions counted by the leading clause of their reason
    pub denial_reasons: BTreeMap<String, usize>,
}

impl SimulationSummary {
    /// Summarize a list of decisions
    pub fn from_decisions(decisions: &[Decision]) -> Self {
        let total_requests = decisions.len();
        let granted_requests = decisions.iter().filter(|d| d.is_granted()).count();
        let denied_requests = total_requests - granted_requests;

        let mut denial_reasons = BTreeMap::new();
        for decision in decisions.iter().filter(|d| !d.is_granted()) {
            let reason = decision.reason();
            *denial_reasons.entry(reason_key(&reason).to_string()).or_insert(0) += 1;
        }

        Self {
            total_requests,
            granted_requests,
            denied_requests,
            success_rate: format_rate(granted_requests, total_requests),
            denial_reasons,
        }
    }

    /// Get the percentage of granted requests
    pub fn success_percentage(&self) -> f64 {
        percentage(self.granted_requests, self.total_requests)
    }

    /// Get the percentage of denied requests
    pub fn denial_percentage(&self) -> f64 {
        percentage(self.denied_requests, self.total_requests)
    }

    /// Number of denials whose reason starts with the given key
    pub fn denial_count(&self, key: &str) -> usize {
        self.denial_reasons.get(key).copied().unwrap_or(0)
    }
}

/// Histogram key for a reason: everything up to and including the first `':'`,
/// or the whole reason when it has no colon
pub fn reason_key(reason: &str) -> &str {
    match reason.find(':') {
        Some(idx) => &reason[..=idx],
        None => reason,
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Format a rate with one decimal, rounding halves up
fn format_rate(part: usize, total: usize) -> String {
    let rounded = (percentage(part, total) * 10.0).round() / 10.0;
    format!("{:.1}%", rounded)
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Access Simulation Summary:")?;
        writeln!(f, "   Total Requests: {}", self.total_requests)?;
        writeln!(f, "   Granted: {}", self.granted_requests)?;
        writeln!(f, "   Denied: {}", self.denied_requests)?;
        writeln!(f, "   Success Rate: {}", self.success_rate)?;

        if !self.denial_reasons.is_empty() {
            writeln!(f, "   Denial Reasons:")?;
            for (reason, count) in &self.denial_reasons {
                writeln!(f, "      {} {}", reason, count)?;
            }
        }

        Ok(())
    }
}
