//! Per-run access history
//!
//! AccessState records, for every (employee, room) pair, the time of the most
//! recent granted entry. It is owned by exactly one evaluator and emptied
//! between runs.

use crate::types::{EmployeeId, RoomName, TimeOfDay};
use std::collections::HashMap;

/// Last granted entry time per (employee, room) pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessState {
    last_granted: HashMap<EmployeeId, HashMap<RoomName, TimeOfDay>>,
}

impl AccessState {
    /// Create an empty access history
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last granted entry for a pair, if any
    pub fn last_granted(&self, employee_id: &EmployeeId, room: &RoomName) -> Option<TimeOfDay> {
        self.last_granted.get(employee_id)?.get(room).copied()
    }

    /// Record a granted entry, replacing any earlier one for the pair
    pub fn record(&mut self, employee_id: EmployeeId, room: RoomName, time: TimeOfDay) {
        self.last_granted.entry(employee_id).or_default().insert(room, time);
    }

    /// Forget all recorded entries
    pub fn clear(&mut self) {
        self.last_granted.clear();
    }

    /// Number of pairs with a recorded entry
    pub fn len(&self) -> usize {
        self.last_granted.values().map(HashMap::len).sum()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.last_granted.is_empty()
    }
}
