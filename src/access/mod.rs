//! Access requests, decisions and the evaluation engine
//!
//! This module turns access requests into decisions:
//!
//! - **AccessRequest**: one badge swipe (employee, level, time, room)
//! - **AccessEvaluator**: applies room rules in order and tracks cooldowns
//! - **AccessState**: last granted entry per (employee, room) for one run
//! - **Decision**: the outcome of a request with a structured reason
//!
//! # Usage Example
//!
//! ```rust
//! use badge_access_evaluator::access::*;
//! use badge_access_evaluator::policy::PolicyTable;
//! use std::sync::Arc;
//!
//! let mut evaluator = AccessEvaluator::new(Arc::new(PolicyTable::default()));
//!
//! let decisions = evaluator.evaluate_batch(&[
//!     AccessRequest::new("EMP1", 2, "09:20".parse().unwrap(), "ServerRoom"),
//!     AccessRequest::new("EMP1", 2, "09:15".parse().unwrap(), "ServerRoom"),
//! ]);
//!
//! assert!(decisions[0].is_granted());
//! assert!(decisions[1].reason().starts_with("Access denied: Cooldown period active"));
//! ```

pub mod decision;
pub mod evaluator;
pub mod request;
pub mod state;

// Re-export all public types for convenience
pub use decision::*;
pub use evaluator::*;
pub use request::*;
pub use state::*;
