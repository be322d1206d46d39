//! Command implementations for the leakscan CLI
//!
//! Each command lives in its own module with an `Args` struct and an
//! `execute` function.

pub mod redact;
pub mod risk;
pub mod scan;
