//! Secret scanning and redaction engine
//!
//! Pattern-based detection over in-memory text blobs plus a glob-based
//! sensitive-file classifier. Everything here is a pure function over
//! static tables and caller-supplied strings, so concurrent use needs no
//! coordination.

pub mod core;
pub mod patterns;
pub mod redact;
pub mod sensitive;
pub mod types;

pub use self::core::{Scanner, ScannerConfig, scan_content};
pub use redact::{DEFAULT_VISIBLE_CHARS, redact_secret};
pub use sensitive::{SENSITIVE_FILES, file_risk_level, is_sensitive_file};
pub use types::{
    RiskLevel, ScanReport, ScanStats, SecretFinding, SensitiveFile, Severity, Warning,
};
