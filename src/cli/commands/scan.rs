use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::cli::output::Output;
use crate::scanner::patterns::SECRET_PATTERNS;
use crate::scanner::{ScanReport, Scanner, ScannerConfig, Severity};

#[derive(Args)]
pub struct ScanArgs {
    /// Files or directories to scan
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Maximum file size to scan in MB
    #[arg(long, default_value = "10")]
    pub max_file_size: usize,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Show statistics after scanning
    #[arg(long)]
    pub stats: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// List all built-in detection rules and exit
    #[arg(long)]
    pub list_patterns: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON report
    Json,
}

pub fn execute(args: ScanArgs, output: &Output) -> Result<()> {
    if args.list_patterns {
        print_pattern_list(output);
        return Ok(());
    }

    let scanner = Scanner::new(ScannerConfig {
        max_file_size_mb: args.max_file_size,
        follow_symlinks: args.follow_symlinks,
    });

    let scan_paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    if matches!(args.format, OutputFormat::Text) {
        output.info("Scanning for secrets...");
    }
    let report = scanner.scan_paths(&scan_paths);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_text_report(&report, &args, output);
        }
    }

    // Non-zero exit when anything was found, for hook/CI use
    if !report.findings.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_pattern_list(output: &Output) {
    println!("Built-in detection rules ({} total):", SECRET_PATTERNS.len());
    println!();
    for pattern in SECRET_PATTERNS.iter() {
        if output.is_verbose() {
            println!(
                "  {} [{}] - {}",
                style(pattern.name).cyan().bold(),
                severity_style(pattern.severity),
                style(pattern.description).dim()
            );
        } else {
            println!("  - {}", pattern.name);
        }
    }
}

fn print_text_report(report: &ScanReport, args: &ScanArgs, output: &Output) {
    if !report.sensitive_file_list.is_empty() {
        output.header("Sensitive files");
        for hit in &report.sensitive_file_list {
            println!(
                "  {} {} [risk: {}]",
                style("•").cyan(),
                style(&hit.path).underlined(),
                hit.risk
            );
        }
    }

    if report.findings.is_empty() {
        output.success("No secrets detected!");
    } else {
        output.header("Findings");
        for finding in &report.findings {
            let location = match finding.line_number {
                Some(line) => format!("{}:{line}", finding.file_path),
                None => finding.file_path.clone(),
            };
            println!(
                "  {} {} [{}]",
                style(location).cyan().bold(),
                severity_style(finding.severity),
                style(&finding.rule_name).red().bold()
            );
            println!("    {}", style(&finding.matched_text).dim());
            if output.is_verbose() {
                println!("    context: {}", style(&finding.context).dim());
            }
        }
        println!();
        output.warning(&format!(
            "Found {} potential secrets!",
            report.findings.len()
        ));
    }

    for warning in &report.warnings {
        output.warning(&warning.message);
    }

    if args.stats {
        output.header("Scan statistics");
        output.summary_stats("Files scanned:", report.stats.files_scanned);
        output.summary_stats("Files skipped:", report.stats.files_skipped);
        output.summary_stats("Secrets found:", report.stats.secrets_found);
        output.summary_stats("Sensitive files:", report.stats.sensitive_files);
        output.summary_stats(
            "Scan time (ms):",
            report.stats.scan_duration_ms as usize,
        );
    }
}

fn severity_style(severity: Severity) -> console::StyledObject<String> {
    let label = severity.to_string();
    match severity {
        Severity::High => style(label).red().bold(),
        Severity::Medium => style(label).yellow(),
        Severity::Low => style(label).dim(),
    }
}
