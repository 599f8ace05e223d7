//! Policy table and room lookup
//!
//! This module contains the PolicyTable: the read-only mapping from room name
//! to [`RoomPolicy`] that every evaluation consults. A missing room is a
//! normal lookup result (`None`), not a fault.

use crate::policy::RoomPolicy;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{RoomName, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Room policies keyed by room name, ordered by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable {
    rooms: BTreeMap<RoomName, RoomPolicy>,
}

impl PolicyTable {
    /// Create an empty policy table
    pub fn new() -> Self {
        Self { rooms: BTreeMap::new() }
    }

    /// Builder-style insert
    pub fn with_room(mut self, room: impl Into<RoomName>, policy: RoomPolicy) -> Self {
        self.insert(room, policy);
        self
    }

    /// Add or replace the policy for a room
    pub fn insert(&mut self, room: impl Into<RoomName>, policy: RoomPolicy) -> Option<RoomPolicy> {
        self.rooms.insert(room.into(), policy)
    }

    /// Look up the policy for a room by exact name
    pub fn get(&self, room: &str) -> Option<&RoomPolicy> {
        self.rooms.get(room)
    }

    /// Check if a room is known
    pub fn contains(&self, room: &str) -> bool {
        self.rooms.contains_key(room)
    }

    /// Number of rooms in the table
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check if the table has no rooms
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over rooms and their policies in name order
    pub fn iter(&self) -> impl Iterator<Item = (&RoomName, &RoomPolicy)> {
        self.rooms.iter()
    }

    /// Rooms whose hours window opens after it closes
    pub fn inverted_windows(&self) -> Vec<&RoomName> {
        self.rooms
            .iter()
            .filter(|(_, policy)| policy.has_inverted_hours())
            .map(|(room, _)| room)
            .collect()
    }

    /// Parse a policy table from its JSON form
    pub fn from_json(json: &str) -> SimulationResult<Self> {
        let table: PolicyTable = serde_json::from_str(json)
            .map_err(|e| SimulationError::policy_error(format!("Failed to parse policy table: {}", e)))?;

        for room in table.inverted_windows() {
            warn!(room = %room, "Room opens after it closes and will deny every request");
        }

        Ok(table)
    }

    /// Load a policy table from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SimulationError::policy_error(format!(
                "Policy file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let table = Self::from_json(&content)?;

        info!("Loaded {} room policies from {}", table.room_count(), path.display());
        Ok(table)
    }

    /// Render the table as pretty JSON
    pub fn to_json_pretty(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for PolicyTable {
    /// The built-in facility: ServerRoom, Vault and R&D Lab
    fn default() -> Self {
        Self::new()
            .with_room("ServerRoom", RoomPolicy::new(2, hm(9, 0), hm(11, 0), 15))
            .with_room("Vault", RoomPolicy::new(3, hm(9, 0), hm(10, 0), 30))
            .with_room("R&D Lab", RoomPolicy::new(1, hm(8, 0), hm(12, 0), 10))
    }
}

fn hm(hours: u16, minutes: u16) -> TimeOfDay {
    TimeOfDay::at(hours, minutes)
}
