//! Simulation reports
//!
//! A report bundles a run's ordered decisions with their summary and renders
//! them for the caller as JSON or CSV.

use crate::access::{AccessRequest, Decision};
use crate::simulation::{SimulationResult, SimulationSummary};
use crate::types::{OutputFormat, RunId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// The output of one simulation run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// Identifier of the run that produced this report
    pub run_id: RunId,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Decisions in chronological processing order
    pub results: Vec<Decision>,
    /// Aggregate statistics over `results`
    pub summary: SimulationSummary,
    /// The evaluated input, echoed when the built-in sample batch was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_data: Option<Vec<AccessRequest>>,
}

impl SimulationReport {
    /// Build a report from a run's decisions
    pub fn new(run_id: RunId, results: Vec<Decision>) -> Self {
        let summary = SimulationSummary::from_decisions(&results);
        Self { run_id, generated_at: Utc::now(), results, summary, employee_data: None }
    }

    /// Attach the input requests to the report
    pub fn with_employee_data(mut self, employees: Vec<AccessRequest>) -> Self {
        self.employee_data = Some(employees);
        self
    }

    /// Render as pretty-printed JSON
    pub fn to_json_pretty(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the decisions as CSV with a header row
    pub fn to_csv(&self) -> String {
        let mut output = String::from("employeeId,room,requestTime,granted,reason\n");

        for decision in &self.results {
            let row = [
                csv_field(decision.employee_id.as_str()),
                csv_field(decision.room.as_str()),
                decision.requested_time.to_string(),
                decision.is_granted().to_string(),
                csv_field(&decision.reason()),
            ];
            output.push_str(&row.join(","));
            output.push('\n');
        }

        output
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> SimulationResult<String> {
        match format {
            OutputFormat::Json => self.to_json_pretty(),
            OutputFormat::Csv => Ok(self.to_csv()),
        }
    }

    /// Render and write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> SimulationResult<()> {
        let path = path.as_ref();
        fs::write(path, self.render(format)?)?;

        info!("Wrote {} report for {} to {}", format, self.run_id, path.display());
        Ok(())
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::DenialReason;

    fn report() -> SimulationReport {
        let granted = AccessRequest::new("EMP001", 2, "09:15".parse().unwrap(), "ServerRoom");
        let denied = AccessRequest::new("EMP002", 1, "09:30".parse().unwrap(), "Vault");

        SimulationReport::new(
            RunId::new(),
            vec![
                Decision::granted(&granted),
                Decision::denied(&denied, DenialReason::InsufficientAccessLevel { required: 3, actual: 1 }),
            ],
        )
    }

    #[test]
    fn test_report_summary_matches_results() {
        let report = report();
        assert_eq!(report.summary.total_requests, report.results.len());
        assert_eq!(report.summary.granted_requests, 1);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(report()).unwrap();

        assert!(value["results"].is_array());
        assert_eq!(value["results"][0]["granted"], true);
        assert_eq!(value["summary"]["successRate"], "50.0%");
        assert!(value["runId"].as_str().unwrap().starts_with("RUN_"));
        assert!(value.get("employeeData").is_none());
    }

    #[test]
    fn test_employee_data_is_echoed() {
        let employees = vec![AccessRequest::new("EMP001", 2, "09:15".parse().unwrap(), "ServerRoom")];
        let value = serde_json::to_value(report().with_employee_data(employees)).unwrap();

        assert_eq!(value["employeeData"][0]["id"], "EMP001");
        assert_eq!(value["employeeData"][0]["request_time"], "09:15");
    }

    #[test]
    fn test_csv_rendering() {
        let csv = report().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "employeeId,room,requestTime,granted,reason");
        assert_eq!(lines[1], "EMP001,ServerRoom,09:15,true,Access granted to ServerRoom");
        assert_eq!(
            lines[2],
            "EMP002,Vault,09:30,false,\"Access denied: Insufficient access level (required: 3, has: 1)\""
        );
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        report().write_to_file(&path, OutputFormat::Csv).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("employeeId,room"));
    }
}
