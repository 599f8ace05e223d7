//! Room access policies
//!
//! This module holds the per-room rules (access level floor, operating hours,
//! cooldown) and the table that maps room names to them.
//!
//! # Usage Example
//!
//! ```rust
//! use badge_access_evaluator::policy::*;
//!
//! let table = PolicyTable::default();
//! let server_room = table.get("ServerRoom").unwrap();
//!
//! assert!(server_room.admits_level(2));
//! assert!(server_room.is_open_at("09:00".parse().unwrap()));
//! assert!(table.get("Cafeteria").is_none());
//! ```

pub mod room_policy;
pub mod table;

// Re-export all public types for convenience
pub use room_policy::*;
pub use table::*;
