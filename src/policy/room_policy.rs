//! Per-room access policy
//!
//! This module contains the RoomPolicy struct: the access level floor,
//! operating hours window, and cooldown that govern a single room.

use crate::types::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Access rules for one room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPolicy {
    /// Minimum badge access level required to enter
    pub min_access_level: u32,
    /// First minute of the day the room admits anyone (inclusive)
    pub open_time: TimeOfDay,
    /// Last minute of the day the room admits anyone (inclusive)
    pub close_time: TimeOfDay,
    /// Minutes that must pass between two granted entries by the same employee
    #[serde(rename = "cooldown", alias = "cooldownMinutes")]
    pub cooldown_minutes: u32,
}

impl RoomPolicy {
    /// Create a new room policy
    pub fn new(
        min_access_level: u32,
        open_time: TimeOfDay,
        close_time: TimeOfDay,
        cooldown_minutes: u32,
    ) -> Self {
        Self { min_access_level, open_time, close_time, cooldown_minutes }
    }

    /// Check whether an access level meets this room's floor
    pub fn admits_level(&self, access_level: i64) -> bool {
        access_level >= i64::from(self.min_access_level)
    }

    /// Check whether the room is open at the given time (both bounds inclusive)
    pub fn is_open_at(&self, time: TimeOfDay) -> bool {
        self.open_time <= time && time <= self.close_time
    }

    /// Check whether the hours window can never admit anyone
    pub fn has_inverted_hours(&self) -> bool {
        self.open_time > self.close_time
    }

    /// Operating hours rendered as `HH:MM-HH:MM`
    pub fn hours_label(&self) -> String {
        format!("{}-{}", self.open_time, self.close_time)
    }
}
