// Badge Access Evaluator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/badge-access-evaluator
// ```
//
// Or with custom inputs:
//
// ```console
// $ ./target/release/badge-access-evaluator --policies rooms.json --requests employees.json --verbose
// ```

use anyhow::{Context, Result};
use badge_access_evaluator::access::{sample_requests, AccessRequest};
use badge_access_evaluator::policy::PolicyTable;
use badge_access_evaluator::simulation::{
    LoggingConfig, SimulationError, SimulationReport, SimulationRequest, SimulationRunner,
};
use badge_access_evaluator::types::config::CliArgs;
use badge_access_evaluator::types::{EvaluatorConfig, OutputFormat};
use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match EvaluatorConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::init_quiet()
    };

    let _logging_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Badge Access Evaluator");

    if let Err(e) = run(args) {
        let category = e.downcast_ref::<SimulationError>().map_or("Other", SimulationError::category);
        error!(category, "Evaluation failed: {:#}", e);
        eprintln!("Error ({}): {:#}", category, e);
        process::exit(1);
    }

    info!("Badge Access Evaluator completed successfully");
}

/// Load inputs, evaluate, and emit the report
fn run(args: CliArgs) -> Result<()> {
    let dry_run = args.dry_run;
    let print_policies = args.print_policies;

    // Load configuration from CLI arguments and optional config file
    let config = EvaluatorConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let format = config.get_output_format()?;

    info!("Configuration loaded and validated successfully");

    let policies = Arc::new(load_policies(&config)?);

    if print_policies {
        println!("{}", policies.to_json_pretty()?);
        return Ok(());
    }

    let (requests, echo_input) = load_requests(&config)?;

    // Handle dry run mode
    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - requests will not be evaluated.");
        print_configuration_summary(&config, &policies, requests.len());
        return Ok(());
    }

    let mut runner = SimulationRunner::new(policies);
    let mut report = runner.run_requests(&requests);
    if echo_input {
        report = report.with_employee_data(requests);
    }

    eprintln!("{}", report.summary);
    write_report(&report, &config, format)
}

/// Load the policy table from the configured file, or use the built-in rooms
fn load_policies(config: &EvaluatorConfig) -> Result<PolicyTable> {
    match &config.policy_file {
        Some(path) => PolicyTable::from_file(path)
            .with_context(|| format!("Failed to load room policies from '{}'", path)),
        None => {
            info!("No policy file given, using built-in room policies");
            Ok(PolicyTable::default())
        }
    }
}

/// Load the request batch, falling back to the built-in sample
///
/// The flag is set when the sample is used, so the report can echo its input.
fn load_requests(config: &EvaluatorConfig) -> Result<(Vec<AccessRequest>, bool)> {
    match &config.requests_file {
        Some(path) => {
            let batch = SimulationRequest::from_file(path)
                .with_context(|| format!("Failed to load access requests from '{}'", path))?;
            Ok((batch.employees, false))
        }
        None => {
            info!("No request file given, evaluating the built-in sample batch");
            Ok((sample_requests(), true))
        }
    }
}

/// Write the rendered report to the configured file, or stdout
fn write_report(
    report: &SimulationReport,
    config: &EvaluatorConfig,
    format: OutputFormat,
) -> Result<()> {
    match &config.output_file {
        Some(path) => {
            report
                .write_to_file(path, format)
                .with_context(|| format!("Failed to write report to '{}'", path))?;
            eprintln!("Report written to: {}", path);
        }
        None => println!("{}", report.render(format)?),
    }
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &EvaluatorConfig, policies: &PolicyTable, requests: usize) {
    eprintln!("Configuration:");
    eprintln!(
        "  Policy File: {}",
        config.policy_file.as_deref().unwrap_or("(built-in)")
    );
    eprintln!(
        "  Requests File: {}",
        config.requests_file.as_deref().unwrap_or("(built-in sample)")
    );
    eprintln!("  Output: {}", config.output_file.as_deref().unwrap_or("stdout"));
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Rooms: {}", policies.room_count());
    for (room, policy) in policies.iter() {
        eprintln!(
            "    {}: level {}+, {}, cooldown {} min",
            room,
            policy.min_access_level,
            policy.hours_label(),
            policy.cooldown_minutes
        );
    }
    eprintln!("  Requests: {}", requests);
    eprintln!();
}
