use anyhow::Result;
use clap::Args;
use console::style;

use crate::cli::output::Output;
use crate::scanner::{RiskLevel, file_risk_level, is_sensitive_file};

#[derive(Args)]
pub struct RiskArgs {
    /// Paths to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

pub fn execute(args: RiskArgs, output: &Output) -> Result<()> {
    for path in &args.paths {
        let risk = file_risk_level(path);
        let sensitive = is_sensitive_file(path);

        let risk_label = match risk {
            RiskLevel::High => style(risk.to_string()).red().bold(),
            RiskLevel::Medium => style(risk.to_string()).yellow(),
            RiskLevel::Low => style(risk.to_string()).green(),
        };

        if sensitive {
            println!("{path}: {risk_label} (sensitive file)");
        } else {
            println!("{path}: {risk_label}");
        }
    }

    if output.is_verbose() {
        output.verbose("risk is list-membership first, extension table second");
    }

    Ok(())
}
