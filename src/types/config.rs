//! Configuration structures for the access evaluator
//!
//! This module contains the evaluator configuration, the command line
//! arguments that feed it, and the validation logic applied before a run.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "badge-access-evaluator",
    version = "1.0.0",
    about = "Badge Access Evaluator - Grants or denies room access requests against room policies",
    long_about = "Evaluates a batch of badge access requests in chronological order against per-room policies (minimum access level, operating hours, per-employee cooldown) and reports a decision with a reason for every request, plus summary statistics.

EXAMPLES:
    # Evaluate the built-in sample batch against the built-in rooms
    badge-access-evaluator

    # Evaluate a request file
    badge-access-evaluator --requests employees.json

    # Use custom room policies and write CSV
    badge-access-evaluator --policies rooms.json --requests employees.json --output-format csv

    # Generate configuration template
    badge-access-evaluator --print-config > my-config.json

    # Validate inputs without evaluating
    badge-access-evaluator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Room policy file
    #[arg(
        long,
        help = "Room policy file (JSON)",
        long_help = "JSON object mapping room names to {minAccessLevel, openTime, closeTime, cooldown}. Default: built-in ServerRoom, Vault and R&D Lab policies"
    )]
    pub policies: Option<String>,

    /// Access request file
    #[arg(
        long,
        help = "Access request file (JSON)",
        long_help = "JSON document {\"employees\": [...]} or a bare array of {id, access_level, request_time, room}. Default: built-in sample batch"
    )]
    pub requests: Option<String>,

    /// Report output path
    #[arg(long, help = "Write the report to this file instead of stdout")]
    pub output: Option<String>,

    /// Output format for the report
    #[arg(
        long,
        help = "Output format (json or csv)",
        long_help = "Output format for the simulation report. Supported formats: json, csv. Default: json"
    )]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate inputs without evaluating
    #[arg(long, help = "Load and validate inputs without evaluating requests")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Print the effective policy table and exit
    #[arg(long, help = "Print the effective room policy table in JSON format and exit")]
    pub print_policies: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Room policy file
    pub policy_file: Option<String>,

    /// Access request file
    pub requests_file: Option<String>,

    /// Report output path
    pub output_file: Option<String>,

    /// Output format for the report
    pub output_format: Option<String>,
}

/// Configuration for an evaluator run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluatorConfig {
    /// Room policy file; the built-in table is used when absent
    pub policy_file: Option<String>,

    /// Access request file; the built-in sample batch is used when absent
    pub requests_file: Option<String>,

    /// Report output path; stdout when absent
    pub output_file: Option<String>,

    /// Output format for the report
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for evaluator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Output format is not recognized
    #[error("Unknown output format: {0} (supported: json, csv)")]
    InvalidOutputFormat(String),

    /// A configured path is empty
    #[error("Path for {field} must not be empty")]
    EmptyPath {
        /// Name of the field holding the empty path
        field: String,
    },
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            policy_file: None,
            requests_file: None,
            output_file: None,
            output_format: "json".to_string(),
        }
    }
}

impl EvaluatorConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            policy_file: config_file.policy_file.or(defaults.policy_file),
            requests_file: config_file.requests_file.or(defaults.requests_file),
            output_file: config_file.output_file.or(defaults.output_file),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.policies {
            config.policy_file = Some(value);
        }
        if let Some(value) = args.requests {
            config.requests_file = Some(value);
        }
        if let Some(value) = args.output {
            config.output_file = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.get_output_format()?;

        Self::validate_path("policy_file", self.policy_file.as_deref())?;
        Self::validate_path("requests_file", self.requests_file.as_deref())?;
        Self::validate_path("output_file", self.output_file.as_deref())?;

        Ok(())
    }

    fn validate_path(field: &str, value: Option<&str>) -> Result<(), ConfigValidationError> {
        match value {
            Some(path) if path.trim().is_empty() => {
                Err(ConfigValidationError::EmptyPath { field: field.to_string() })
            }
            _ => Ok(()),
        }
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}
