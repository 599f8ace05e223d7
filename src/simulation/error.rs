//! Error types and handling
//!
//! This module contains the faults that stop a simulation run before any
//! decision is produced. Denied requests are never errors; they are
//! ordinary decisions (see [`crate::access::DenialReason`]).

use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while preparing or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The batch itself is unusable (not JSON, not a list, or missing)
    #[error("Invalid employee data: {0}")]
    InvalidBatch(String),

    /// One request in the batch could not be read; the whole batch is rejected
    #[error("Invalid employee data at index {index}: {message}")]
    InvalidRequest {
        /// Position of the offending request in the input batch
        index: usize,
        /// What was wrong with it
        message: String,
    },

    /// The policy table could not be loaded
    #[error("Policy error: {0}")]
    PolicyError(String),

    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create an invalid batch error
    pub fn invalid_batch(msg: impl Into<String>) -> Self {
        Self::InvalidBatch(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(index: usize, msg: impl Into<String>) -> Self {
        Self::InvalidRequest { index, message: msg.into() }
    }

    /// Create a policy error
    pub fn policy_error(msg: impl Into<String>) -> Self {
        Self::PolicyError(msg.into())
    }

    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Check if the fault lies in caller-supplied input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SimulationError::InvalidBatch(_) | SimulationError::InvalidRequest { .. }
        )
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidBatch(_) => "Invalid Batch",
            SimulationError::InvalidRequest { .. } => "Invalid Request",
            SimulationError::PolicyError(_) => "Policy",
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
