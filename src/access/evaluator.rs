//! The access decision engine
//!
//! [`AccessEvaluator`] applies the room rules to each request and keeps the
//! per-run access history that the cooldown rule depends on.
//!
//! Rules are checked in a fixed order and the first failure decides the
//! reason:
//!
//! 1. the room exists in the policy table
//! 2. the badge level meets the room's floor
//! 3. the request falls inside the room's hours (both bounds inclusive)
//! 4. the employee is not in cooldown for that room
//!
//! Only a request that passes all four is granted, and only a granted request
//! updates the access history.

use crate::access::{AccessRequest, AccessState, Decision, DenialReason};
use crate::policy::{PolicyTable, RoomPolicy};
use crate::types::{EmployeeId, RoomName, TimeOfDay};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Stateful evaluator for one simulation run at a time
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    /// Read-only room rules, shareable between evaluators
    policies: Arc<PolicyTable>,
    /// Last granted entry per (employee, room)
    state: AccessState,
}

impl AccessEvaluator {
    /// Create an evaluator with an empty access history
    pub fn new(policies: Arc<PolicyTable>) -> Self {
        Self { policies, state: AccessState::new() }
    }

    /// The policy table this evaluator consults
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// The current access history
    pub fn state(&self) -> &AccessState {
        &self.state
    }

    /// Check if a badge level meets the room's floor
    pub fn has_valid_access_level(&self, access_level: i64, policy: &RoomPolicy) -> bool {
        policy.admits_level(access_level)
    }

    /// Check if the room is open at the given time
    pub fn is_room_open(&self, time: TimeOfDay, policy: &RoomPolicy) -> bool {
        policy.is_open_at(time)
    }

    /// Check if the employee is still cooling down for this room
    ///
    /// A pair with no recorded entry is never in cooldown. The difference is
    /// plain minute subtraction, so a request just after midnight following a
    /// late-evening entry yields a negative gap and is not in cooldown.
    pub fn is_in_cooldown(
        &self,
        employee_id: &EmployeeId,
        room: &RoomName,
        time: TimeOfDay,
        cooldown_minutes: u32,
    ) -> bool {
        self.blocking_entry(employee_id, room, time, cooldown_minutes).is_some()
    }

    /// Record a granted entry for cooldown tracking
    pub fn record_access(&mut self, employee_id: EmployeeId, room: RoomName, time: TimeOfDay) {
        self.state.record(employee_id, room, time);
    }

    /// Evaluate one request against the rules and the current history
    pub fn evaluate(&mut self, request: &AccessRequest) -> Decision {
        let decision = match self.check_rules(request) {
            Ok(()) => {
                self.record_access(
                    request.employee_id.clone(),
                    request.room.clone(),
                    request.requested_time,
                );
                Decision::granted(request)
            }
            Err(reason) => Decision::denied(request, reason),
        };

        debug!(
            employee_id = %decision.employee_id,
            room = %decision.room,
            request_time = %decision.requested_time,
            granted = decision.is_granted(),
            "{}",
            decision.reason()
        );

        decision
    }

    /// Evaluate a batch in chronological order
    ///
    /// Requests are stably sorted by requested time, so requests at the same
    /// minute keep their input order. Each evaluation sees every grant made
    /// earlier in the sorted sequence. The returned decisions follow the
    /// sorted order, not the input order.
    #[instrument(skip(self, requests), fields(request_count = requests.len()))]
    pub fn evaluate_batch(&mut self, requests: &[AccessRequest]) -> Vec<Decision> {
        let mut ordered: Vec<&AccessRequest> = requests.iter().collect();
        ordered.sort_by_key(|request| request.requested_time);

        let decisions: Vec<Decision> =
            ordered.into_iter().map(|request| self.evaluate(request)).collect();

        info!(
            "Evaluated {} requests ({} granted)",
            decisions.len(),
            decisions.iter().filter(|d| d.is_granted()).count()
        );

        decisions
    }

    /// Forget all recorded entries
    pub fn reset(&mut self) {
        debug!("Clearing {} recorded room entries", self.state.len());
        self.state.clear();
    }

    fn check_rules(&self, request: &AccessRequest) -> Result<(), DenialReason> {
        let policy = self
            .policies
            .get(request.room.as_str())
            .ok_or_else(|| DenialReason::UnknownRoom { room: request.room.clone() })?;

        if !self.has_valid_access_level(request.access_level, policy) {
            return Err(DenialReason::InsufficientAccessLevel {
                required: policy.min_access_level,
                actual: request.access_level,
            });
        }

        if !self.is_room_open(request.requested_time, policy) {
            return Err(DenialReason::RoomClosed {
                open: policy.open_time,
                close: policy.close_time,
                requested: request.requested_time,
            });
        }

        if let Some(last_access) = self.blocking_entry(
            &request.employee_id,
            &request.room,
            request.requested_time,
            policy.cooldown_minutes,
        ) {
            return Err(DenialReason::CooldownActive {
                last_access,
                cooldown_minutes: policy.cooldown_minutes,
            });
        }

        Ok(())
    }

    /// The recorded entry that keeps this pair in cooldown, if any
    fn blocking_entry(
        &self,
        employee_id: &EmployeeId,
        room: &RoomName,
        time: TimeOfDay,
        cooldown_minutes: u32,
    ) -> Option<TimeOfDay> {
        let last_access = self.state.last_granted(employee_id, room)?;
        let elapsed = i64::from(time.minutes_since(last_access));

        // A negative gap (request earlier in the day than the entry) never blocks
        (0..i64::from(cooldown_minutes)).contains(&elapsed).then_some(last_access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> AccessEvaluator {
        AccessEvaluator::new(Arc::new(PolicyTable::default()))
    }

    fn t(time: &str) -> TimeOfDay {
        time.parse().unwrap()
    }

    fn request(id: &str, level: i64, time: &str, room: &str) -> AccessRequest {
        AccessRequest::new(id, level, t(time), room)
    }

    #[test]
    fn test_first_access_is_not_in_cooldown() {
        let evaluator = evaluator();
        assert!(!evaluator.is_in_cooldown(
            &EmployeeId::new("EMP001"),
            &RoomName::new("ServerRoom"),
            t("09:15"),
            15
        ));
    }

    #[test]
    fn test_cooldown_tracked_by_employee_and_room() {
        let mut evaluator = evaluator();
        let emp1 = EmployeeId::new("EMP001");
        let emp2 = EmployeeId::new("EMP002");
        let server_room = RoomName::new("ServerRoom");
        let vault = RoomName::new("Vault");

        evaluator.record_access(emp1.clone(), server_room.clone(), t("09:15"));

        assert!(evaluator.is_in_cooldown(&emp1, &server_room, t("09:25"), 15));
        assert!(!evaluator.is_in_cooldown(&emp1, &vault, t("09:25"), 15));
        assert!(!evaluator.is_in_cooldown(&emp2, &server_room, t("09:25"), 15));
        assert!(!evaluator.is_in_cooldown(&emp1, &server_room, t("09:30"), 15));
        assert!(!evaluator.is_in_cooldown(&emp1, &server_room, t("09:35"), 15));
    }

    #[test]
    fn test_cooldown_does_not_wrap_past_midnight() {
        let mut evaluator = evaluator();
        let emp = EmployeeId::new("EMP001");
        let room = RoomName::new("Night Desk");

        evaluator.record_access(emp.clone(), room.clone(), t("23:55"));
        assert!(!evaluator.is_in_cooldown(&emp, &room, t("00:05"), 30));
    }

    #[test]
    fn test_zero_cooldown_never_blocks() {
        let mut evaluator = evaluator();
        let emp = EmployeeId::new("EMP001");
        let room = RoomName::new("Lobby");

        evaluator.record_access(emp.clone(), room.clone(), t("09:15"));
        assert!(!evaluator.is_in_cooldown(&emp, &room, t("09:15"), 0));
    }

    #[test]
    fn test_grants_valid_request() {
        let mut evaluator = evaluator();
        let decision = evaluator.evaluate(&request("EMP001", 2, "09:15", "ServerRoom"));

        assert!(decision.is_granted());
        assert_eq!(decision.reason(), "Access granted to ServerRoom");
        assert_eq!(evaluator.state().len(), 1);
    }

    #[test]
    fn test_denials_do_not_touch_state() {
        let mut evaluator = evaluator();

        for req in [
            request("EMP001", 2, "09:15", "NonExistentRoom"),
            request("EMP001", 1, "09:15", "ServerRoom"),
            request("EMP001", 2, "08:00", "ServerRoom"),
        ] {
            assert!(!evaluator.evaluate(&req).is_granted());
        }

        assert!(evaluator.state().is_empty());
    }

    #[test]
    fn test_cooldown_denial_keeps_last_grant() {
        let mut evaluator = evaluator();
        let emp = EmployeeId::new("EMP001");
        let room = RoomName::new("ServerRoom");

        assert!(evaluator.evaluate(&request("EMP001", 2, "09:15", "ServerRoom")).is_granted());
        assert!(!evaluator.evaluate(&request("EMP001", 2, "09:25", "ServerRoom")).is_granted());
        assert_eq!(evaluator.state().last_granted(&emp, &room), Some(t("09:15")));

        // The window still runs from 09:15, not from the denied 09:25
        assert!(evaluator.evaluate(&request("EMP001", 2, "09:30", "ServerRoom")).is_granted());
        assert_eq!(evaluator.state().last_granted(&emp, &room), Some(t("09:30")));
    }

    #[test]
    fn test_rule_precedence() {
        let mut evaluator = evaluator();

        // Unknown room wins over everything else
        let decision = evaluator.evaluate(&request("EMP001", 0, "03:00", "Attic"));
        assert_eq!(decision.denial().unwrap().kind(), "UnknownRoom");

        // Access level is checked before hours
        let decision = evaluator.evaluate(&request("EMP001", 1, "03:00", "ServerRoom"));
        assert_eq!(decision.denial().unwrap().kind(), "InsufficientAccessLevel");

        // Hours are checked before cooldown
        evaluator.evaluate(&request("EMP001", 2, "10:55", "ServerRoom"));
        let decision = evaluator.evaluate(&request("EMP001", 2, "11:05", "ServerRoom"));
        assert_eq!(decision.denial().unwrap().kind(), "RoomClosed");
    }

    #[test]
    fn test_cooldown_denial_reason() {
        let mut evaluator = evaluator();
        evaluator.evaluate(&request("EMP001", 2, "09:15", "ServerRoom"));
        let decision = evaluator.evaluate(&request("EMP001", 2, "09:25", "ServerRoom"));

        assert_eq!(
            decision.denial(),
            Some(&DenialReason::CooldownActive { last_access: t("09:15"), cooldown_minutes: 15 })
        );
        assert!(decision.reason().contains("Cooldown period active"));
    }

    #[test]
    fn test_batch_sorted_chronologically() {
        let mut evaluator = evaluator();
        let decisions = evaluator.evaluate_batch(&[
            request("EMP002", 2, "09:30", "ServerRoom"),
            request("EMP001", 2, "09:15", "ServerRoom"),
        ]);

        let ids: Vec<&str> = decisions.iter().map(|d| d.employee_id.as_str()).collect();
        assert_eq!(ids, ["EMP001", "EMP002"]);
        let times: Vec<String> = decisions.iter().map(|d| d.requested_time.to_string()).collect();
        assert_eq!(times, ["09:15", "09:30"]);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut evaluator = evaluator();
        let emp = EmployeeId::new("EMP001");
        let room = RoomName::new("ServerRoom");

        evaluator.record_access(emp.clone(), room.clone(), t("09:15"));
        assert!(evaluator.is_in_cooldown(&emp, &room, t("09:25"), 15));

        evaluator.reset();
        assert!(!evaluator.is_in_cooldown(&emp, &room, t("09:25"), 15));
    }
}
