use serde::Serialize;

/// Severity assigned to a detection rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// Risk ranking for a file path, independent of its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::Low => write!(f, "low"),
        }
    }
}

/// One detected secret, already redacted
///
/// `matched_text` and `context` only ever hold the redacted form; the raw
/// matched substring is dropped inside the scan call that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SecretFinding {
    pub rule_name: String,
    pub description: String,
    pub severity: Severity,
    pub file_path: String,
    pub commit: String,
    pub line_number: Option<usize>,
    pub matched_text: String,
    pub context: String,
}

/// A file flagged by name/path alone, regardless of content
#[derive(Debug, Clone, Serialize)]
pub struct SensitiveFile {
    pub path: String,
    pub risk: RiskLevel,
}

/// Statistics from a scanning operation
#[derive(Debug, Default, Serialize)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub secrets_found: usize,
    pub sensitive_files: usize,
    pub scan_duration_ms: u64,
}

/// Warning generated during scanning
#[derive(Debug, Serialize)]
pub struct Warning {
    pub message: String,
}

/// Aggregated result of scanning a set of files or directories
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub stats: ScanStats,
    pub findings: Vec<SecretFinding>,
    pub sensitive_file_list: Vec<SensitiveFile>,
    pub warnings: Vec<Warning>,
}
