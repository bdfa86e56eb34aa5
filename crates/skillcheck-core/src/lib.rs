//! Skill verification logic for skillcheck.
//!
//! Resolves the skill base directory and runs the existence pass over a
//! [`skillcheck_types::skill::SkillLayout`]. Printing and exit codes belong to
//! the binary; this crate only produces reports.

pub mod verifier;

pub use verifier::{resolve_base_dir, Verifier};
