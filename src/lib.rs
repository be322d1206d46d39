//! # Leakscan - Secret Scanning and Redaction for Git History Cleanup
//!
//! A pattern-based classifier that inspects historical file content and
//! commit metadata, flags probable credentials with a severity and category,
//! and produces redacted, hash-identified findings safe to display or log.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan the working tree
//! leakscan scan --stats
//!
//! # Classify a path by secret-storage risk
//! leakscan risk .env src/main.rs
//!
//! # Redact a value for safe logging
//! leakscan redact "sk-1234567890abcdef"
//! ```
//!
//! As a library, the engine is four pure functions over static tables:
//! [`scan_content`], [`redact_secret`], [`is_sensitive_file`], and
//! [`file_risk_level`]. All are safe to call concurrently without
//! coordination.

pub mod cli;
pub mod scanner;

pub use cli::{Cli, Output};
pub use scanner::{
    RiskLevel, ScanReport, Scanner, ScannerConfig, SecretFinding, Severity, file_risk_level,
    is_sensitive_file, redact_secret, scan_content,
};

/// Result type alias for leakscan operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
