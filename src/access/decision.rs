//! Access decisions and denial reasons
//!
//! Every evaluated request yields exactly one [`Decision`]. The reason is kept
//! as structured data ([`AccessOutcome`] / [`DenialReason`]) and rendered to
//! its human-readable wording only when displayed or serialized.

use crate::access::AccessRequest;
use crate::types::{EmployeeId, RoomName, TimeOfDay};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Why a request was denied, in rule-check order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// The room is not in the policy table
    UnknownRoom {
        /// Requested room
        room: RoomName,
    },
    /// The badge's level is below the room's floor
    InsufficientAccessLevel {
        /// Room floor
        required: u32,
        /// Level presented
        actual: i64,
    },
    /// The request falls outside the room's operating hours
    RoomClosed {
        /// Opening time
        open: TimeOfDay,
        /// Closing time
        close: TimeOfDay,
        /// Time of the request
        requested: TimeOfDay,
    },
    /// The employee entered this room too recently
    CooldownActive {
        /// Time of the last granted entry
        last_access: TimeOfDay,
        /// Room cooldown length
        cooldown_minutes: u32,
    },
}

impl DenialReason {
    /// Short name of the denial kind
    pub fn kind(&self) -> &'static str {
        match self {
            DenialReason::UnknownRoom { .. } => "UnknownRoom",
            DenialReason::InsufficientAccessLevel { .. } => "InsufficientAccessLevel",
            DenialReason::RoomClosed { .. } => "RoomClosed",
            DenialReason::CooldownActive { .. } => "CooldownActive",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::UnknownRoom { room } => {
                write!(f, "Room '{}' not found in system", room)
            }
            DenialReason::InsufficientAccessLevel { required, actual } => write!(
                f,
                "Access denied: Insufficient access level (required: {}, has: {})",
                required, actual
            ),
            DenialReason::RoomClosed { open, close, requested } => write!(
                f,
                "Access denied: Room closed (open: {}-{}, requested: {})",
                open, close, requested
            ),
            DenialReason::CooldownActive { last_access, cooldown_minutes } => write!(
                f,
                "Access denied: Cooldown period active (last access: {}, cooldown: {} minutes)",
                last_access, cooldown_minutes
            ),
        }
    }
}

/// Grant or denial of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Every rule passed
    Granted,
    /// The first failing rule
    Denied(DenialReason),
}

impl AccessOutcome {
    /// Check if access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessOutcome::Granted)
    }

    /// The denial reason, if denied
    pub fn denial(&self) -> Option<&DenialReason> {
        match self {
            AccessOutcome::Granted => None,
            AccessOutcome::Denied(reason) => Some(reason),
        }
    }
}

/// The evaluated outcome of one access request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Employee who made the request
    pub employee_id: EmployeeId,
    /// Requested room
    pub room: RoomName,
    /// Time of the request
    pub requested_time: TimeOfDay,
    /// Structured outcome
    pub outcome: AccessOutcome,
}

impl Decision {
    /// Create a granted decision for a request
    pub fn granted(request: &AccessRequest) -> Self {
        Self::with_outcome(request, AccessOutcome::Granted)
    }

    /// Create a denied decision for a request
    pub fn denied(request: &AccessRequest, reason: DenialReason) -> Self {
        Self::with_outcome(request, AccessOutcome::Denied(reason))
    }

    fn with_outcome(request: &AccessRequest, outcome: AccessOutcome) -> Self {
        Self {
            employee_id: request.employee_id.clone(),
            room: request.room.clone(),
            requested_time: request.requested_time,
            outcome,
        }
    }

    /// Check if access was granted
    pub fn is_granted(&self) -> bool {
        self.outcome.is_granted()
    }

    /// The denial reason, if denied
    pub fn denial(&self) -> Option<&DenialReason> {
        self.outcome.denial()
    }

    /// Human-readable reason
    pub fn reason(&self) -> String {
        match &self.outcome {
            AccessOutcome::Granted => format!("Access granted to {}", self.room),
            AccessOutcome::Denied(reason) => reason.to_string(),
        }
    }
}

impl Serialize for Decision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Decision", 5)?;
        state.serialize_field("employeeId", &self.employee_id)?;
        state.serialize_field("room", &self.room)?;
        state.serialize_field("requestTime", &self.requested_time)?;
        state.serialize_field("granted", &self.is_granted())?;
        state.serialize_field("reason", &self.reason())?;
        state.end()
    }
}
