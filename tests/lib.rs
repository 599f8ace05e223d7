// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use badge_access_evaluator::*;


#[test]
fn test_core_id_types() {
    let run_id = RunId::new();

    // Run IDs are unique and carry their prefix
    assert_ne!(run_id, RunId::new());
    assert!(run_id.to_string().starts_with("RUN_"));

    // Employee and room identifiers keep their text as given
    assert_eq!(EmployeeId::new("EMP001").to_string(), "EMP001");
    assert_eq!(RoomName::from("R&D Lab").as_str(), "R&D Lab");
}

#[test]
fn test_default_policy_table() {
    let policies = PolicyTable::default();

    assert_eq!(policies.room_count(), 3);

    let server_room = policies.get("ServerRoom").unwrap();
    assert_eq!(server_room.min_access_level, 2);
    assert_eq!(server_room.hours_label(), "09:00-11:00");
    assert_eq!(server_room.cooldown_minutes, 15);

    let vault = policies.get("Vault").unwrap();
    assert_eq!(vault.min_access_level, 3);
    assert_eq!(vault.cooldown_minutes, 30);

    let lab = policies.get("R&D Lab").unwrap();
    assert_eq!(lab.hours_label(), "08:00-12:00");
}

#[test]
fn test_reexported_run_pipeline() {
    let mut runner = SimulationRunner::new(std::sync::Arc::new(PolicyTable::default()));
    let report: SimulationReport = runner.run_requests(&sample_requests());

    let summary: &SimulationSummary = &report.summary;
    assert_eq!(summary.total_requests, 5);
    assert!(report.results.iter().any(Decision::is_granted));
}
