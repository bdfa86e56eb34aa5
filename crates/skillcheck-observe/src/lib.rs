//! Diagnostic logging setup shared by skillcheck binaries.

pub mod tracing_setup;
