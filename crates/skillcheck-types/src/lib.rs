//! Shared domain types for skillcheck.
//!
//! Skill layouts (name + required files), verification reports, and their
//! error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod error;
pub mod skill;
