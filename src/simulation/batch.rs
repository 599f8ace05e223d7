//! Batch ingestion and validation
//!
//! Callers hand the simulator a JSON document of employee access records.
//! This module checks the document's shape and turns it into typed
//! [`AccessRequest`]s before anything reaches the evaluator. A malformed
//! record rejects the whole batch; no partial results are produced.

use crate::access::AccessRequest;
use crate::simulation::{SimulationError, SimulationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A validated batch of access requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Requests in input order
    pub employees: Vec<AccessRequest>,
}

impl SimulationRequest {
    /// Wrap already-typed requests
    pub fn new(employees: Vec<AccessRequest>) -> Self {
        Self { employees }
    }

    /// Parse a batch from JSON text
    ///
    /// Accepts `{"employees": [...]}` or a bare array of records.
    pub fn from_json(json: &str) -> SimulationResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| SimulationError::invalid_batch(format!("malformed JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Validate an already-parsed JSON document
    pub fn from_value(value: Value) -> SimulationResult<Self> {
        let records = match value {
            Value::Array(records) => records,
            Value::Object(mut body) => match body.remove("employees") {
                Some(Value::Array(records)) => records,
                Some(other) => {
                    return Err(SimulationError::invalid_batch(format!(
                        "`employees` must be a list, got {}",
                        json_type_name(&other)
                    )))
                }
                None => return Err(SimulationError::invalid_batch("missing `employees` list")),
            },
            other => {
                return Err(SimulationError::invalid_batch(format!(
                    "expected an object with an `employees` list, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let employees = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value::<AccessRequest>(record)
                    .map_err(|e| SimulationError::invalid_request(index, e.to_string()))
            })
            .collect::<SimulationResult<Vec<_>>>()?;

        debug!("Validated batch of {} requests", employees.len());
        Ok(Self { employees })
    }

    /// Load a batch from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let batch = Self::from_json(&content)?;

        info!("Loaded {} access requests from {}", batch.len(), path.display());
        Ok(batch)
    }

    /// Number of requests
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Check if the batch is empty
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_employees_document() {
        let json = r#"{"employees": [
            {"id": "EMP001", "access_level": 2, "request_time": "09:15", "room": "ServerRoom"},
            {"id": "EMP002", "access_level": 1, "request_time": "09:30", "room": "Vault"}
        ]}"#;
        let batch = SimulationRequest::from_json(json).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.employees[1].employee_id.as_str(), "EMP002");
    }

    #[test]
    fn test_parses_bare_array() {
        let json = r#"[{"id": "EMP001", "access_level": 2, "request_time": "09:15", "room": "ServerRoom"}]"#;
        assert_eq!(SimulationRequest::from_json(json).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let batch = SimulationRequest::from_json(r#"{"employees": []}"#).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_invalid_or_missing_employee_data() {
        for payload in [r#"{"employees": "invalid"}"#, "{}", "42", r#"{"invalid": json}"#] {
            match SimulationRequest::from_json(payload) {
                Err(err @ SimulationError::InvalidBatch(_)) => {
                    assert!(err.to_string().contains("Invalid employee data"))
                }
                other => panic!("Expected InvalidBatch for {}, got {:?}", payload, other),
            }
        }
    }

    #[test]
    fn test_malformed_record_rejects_whole_batch() {
        let json = r#"{"employees": [
            {"id": "EMP001", "access_level": 2, "request_time": "09:15", "room": "ServerRoom"},
            {"id": "EMP002", "access_level": 1, "request_time": "half past nine", "room": "Vault"}
        ]}"#;

        match SimulationRequest::from_json(json) {
            Err(SimulationError::InvalidRequest { index, message }) => {
                assert_eq!(index, 1);
                assert!(message.contains("half past nine"));
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(
            &path,
            r#"[{"id": "EMP001", "access_level": 3, "request_time": "09:15", "room": "Vault"}]"#,
        )
        .unwrap();

        let batch = SimulationRequest::from_file(&path).unwrap();
        assert_eq!(batch.employees[0].room.as_str(), "Vault");
    }

    #[test]
    fn test_from_missing_file() {
        let result = SimulationRequest::from_file("/definitely/not/employees.json");
        assert!(matches!(result, Err(SimulationError::IoError(_))));
    }
}
