//! Core types and identifiers for the access evaluator
//!
//! This module contains the fundamental value types shared by the policy,
//! access, and simulation modules.
//!
//! # Overview
//!
//! - **Identifiers**: employee IDs, room names, and per-run UUIDs
//! - **Time**: minute-resolution wall-clock time of day
//! - **Enums**: report output formats
//! - **Configuration**: evaluator configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use badge_access_evaluator::types::*;
//!
//! let employee = EmployeeId::new("EMP001");
//! let room = RoomName::new("ServerRoom");
//! let time: TimeOfDay = "09:15".parse().unwrap();
//!
//! assert_eq!(time.minutes(), 555);
//! assert_eq!(employee.as_str(), "EMP001");
//! assert_eq!(room.to_string(), "ServerRoom");
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod time;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use time::*;
