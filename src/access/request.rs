//! Access requests
//!
//! An [`AccessRequest`] is one badge swipe: who, with what clearance, when,
//! and at which room. Requests are immutable input values.

use crate::types::{EmployeeId, RoomName, TimeOfDay};
use serde::{Deserialize, Serialize};

/// A single room access request
///
/// The JSON form uses the employee record field names
/// (`id`, `access_level`, `request_time`, `room`); camelCase names are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Employee presenting the badge
    #[serde(rename = "id", alias = "employeeId")]
    pub employee_id: EmployeeId,
    /// Clearance level carried by the badge
    #[serde(alias = "accessLevel")]
    pub access_level: i64,
    /// Wall-clock time of the swipe
    #[serde(rename = "request_time", alias = "requestTime", alias = "requestedTime")]
    pub requested_time: TimeOfDay,
    /// Room the employee wants to enter
    pub room: RoomName,
}

impl AccessRequest {
    /// Create a new access request
    pub fn new(
        employee_id: impl Into<EmployeeId>,
        access_level: i64,
        requested_time: TimeOfDay,
        room: impl Into<RoomName>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            access_level,
            requested_time,
            room: room.into(),
        }
    }
}

/// The built-in demonstration batch, evaluated when no request file is given
pub fn sample_requests() -> Vec<AccessRequest> {
    vec![
        AccessRequest::new("EMP001", 3, TimeOfDay::at(9, 15), "Vault"),
        AccessRequest::new("EMP002", 1, TimeOfDay::at(9, 20), "ServerRoom"),
        AccessRequest::new("EMP003", 2, TimeOfDay::at(11, 30), "ServerRoom"),
        AccessRequest::new("EMP004", 1, TimeOfDay::at(10, 0), "R&D Lab"),
        AccessRequest::new("EMP001", 3, TimeOfDay::at(9, 20), "Vault"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_record() {
        let json = r#"{"id": "EMP001", "access_level": 2, "request_time": "09:15", "room": "ServerRoom"}"#;
        let request: AccessRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.employee_id.as_str(), "EMP001");
        assert_eq!(request.access_level, 2);
        assert_eq!(request.requested_time.minutes(), 555);
        assert_eq!(request.room.as_str(), "ServerRoom");
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{"employeeId": "EMP009", "accessLevel": 1, "requestedTime": "08:00", "room": "R&D Lab"}"#;
        let request: AccessRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.employee_id.as_str(), "EMP009");
        assert_eq!(request.requested_time.to_string(), "08:00");
    }

    #[test]
    fn test_serialize_uses_record_names() {
        let request = AccessRequest::new("EMP001", 2, "09:15".parse().unwrap(), "ServerRoom");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["id"], "EMP001");
        assert_eq!(value["access_level"], 2);
        assert_eq!(value["request_time"], "09:15");
        assert_eq!(value["room"], "ServerRoom");
    }

    #[test]
    fn test_malformed_fields_are_rejected() {
        let bad_time = r#"{"id": "EMP001", "access_level": 2, "request_time": "9 am", "room": "Vault"}"#;
        assert!(serde_json::from_str::<AccessRequest>(bad_time).is_err());

        let empty_id = r#"{"id": "", "access_level": 2, "request_time": "09:00", "room": "Vault"}"#;
        assert!(serde_json::from_str::<AccessRequest>(empty_id).is_err());

        let missing_room = r#"{"id": "EMP001", "access_level": 2, "request_time": "09:00"}"#;
        assert!(serde_json::from_str::<AccessRequest>(missing_room).is_err());
    }

    #[test]
    fn test_sample_requests() {
        let sample = sample_requests();
        assert_eq!(sample.len(), 5);
        assert_eq!(sample[0].employee_id.as_str(), "EMP001");
        assert_eq!(sample[3].room.as_str(), "R&D Lab");
    }
}
