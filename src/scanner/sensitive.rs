use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use lazy_static::lazy_static;

use super::types::RiskLevel;

/// Filenames historically associated with secret storage. Shell-style
/// globs, tested against both the base name and the full path.
pub const SENSITIVE_FILES: &[&str] = &[
    ".env",
    ".env.local",
    ".env.production",
    ".env.development",
    "credentials.json",
    "secrets.json",
    "config.json",
    "settings.json",
    ".npmrc",
    ".pypirc",
    "id_rsa",
    "id_dsa",
    "id_ecdsa",
    "id_ed25519",
    "*.pem",
    "*.key",
    "*.p12",
    "*.pfx",
    "service-account.json",
    "firebase-adminsdk*.json",
    ".htpasswd",
    "wp-config.php",
    "database.yml",
    "secrets.yml",
];

lazy_static! {
    static ref SENSITIVE_MATCHER: GlobSet =
        build_globset(SENSITIVE_FILES).expect("sensitive file globs must compile");
}

fn build_globset(patterns: &[&str]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Whether a path names a file that likely holds secrets, regardless of
/// its content. Total over all string inputs.
pub fn is_sensitive_file(path: &str) -> bool {
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    SENSITIVE_MATCHER.is_match(name.as_ref()) || SENSITIVE_MATCHER.is_match(path)
}

/// Risk ranking for a file path. Sensitive-list membership wins over the
/// extension table; unknown extensions fall through to low.
pub fn file_risk_level(path: &str) -> RiskLevel {
    if is_sensitive_file(path) {
        return RiskLevel::High;
    }

    // Extension is everything after the last dot in the path string
    let ext = path.rfind('.').map(|i| &path[i..]).unwrap_or("");

    match ext {
        ".pem" | ".key" | ".p12" | ".pfx" | ".env" => RiskLevel::High,
        ".json" | ".yml" | ".yaml" | ".xml" | ".conf" | ".cfg" => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_files() {
        assert!(is_sensitive_file(".env"));
        assert!(is_sensitive_file(".env.local"));
        assert!(is_sensitive_file(".env.production"));
    }

    #[test]
    fn test_credential_files() {
        assert!(is_sensitive_file("credentials.json"));
        assert!(is_sensitive_file("secrets.json"));
        assert!(is_sensitive_file("service-account.json"));
        assert!(is_sensitive_file("firebase-adminsdk-x2f9.json"));
    }

    #[test]
    fn test_key_files() {
        assert!(is_sensitive_file("id_rsa"));
        assert!(is_sensitive_file("server.key"));
        assert!(is_sensitive_file("cert.pem"));
    }

    #[test]
    fn test_base_name_matching_in_subdirectories() {
        assert!(is_sensitive_file("config/secrets/.env"));
        assert!(is_sensitive_file("certs/server.pem"));
        assert!(is_sensitive_file("home/user/.ssh/id_ed25519"));
    }

    #[test]
    fn test_normal_files() {
        assert!(!is_sensitive_file("main.py"));
        assert!(!is_sensitive_file("README.md"));
        assert!(!is_sensitive_file("package.json"));
        assert!(!is_sensitive_file(""));
    }

    #[test]
    fn test_high_risk() {
        assert_eq!(file_risk_level(".env"), RiskLevel::High);
        assert_eq!(file_risk_level("id_rsa"), RiskLevel::High);
        assert_eq!(file_risk_level("server.pem"), RiskLevel::High);
    }

    #[test]
    fn test_medium_risk_extensions() {
        // config.json is on the sensitive list, so use names that are not
        assert_eq!(file_risk_level("app_settings.json"), RiskLevel::Medium);
        assert_eq!(file_risk_level("data.yml"), RiskLevel::Medium);
        assert_eq!(file_risk_level("server.conf"), RiskLevel::Medium);
    }

    #[test]
    fn test_list_membership_beats_extension() {
        // secrets.yml is on the sensitive list and has a medium extension;
        // the list must win
        assert_eq!(file_risk_level("secrets.yml"), RiskLevel::High);
        assert_eq!(file_risk_level("database.yml"), RiskLevel::High);
    }

    #[test]
    fn test_low_risk_fallthrough() {
        assert_eq!(file_risk_level("main.py"), RiskLevel::Low);
        assert_eq!(file_risk_level("index.js"), RiskLevel::Low);
        assert_eq!(file_risk_level("Makefile"), RiskLevel::Low);
    }
}
