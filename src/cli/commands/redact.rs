use std::io::{self, BufRead};

use anyhow::Result;
use clap::Args;

use crate::scanner::{DEFAULT_VISIBLE_CHARS, redact_secret};

#[derive(Args)]
pub struct RedactArgs {
    /// Text to redact; reads lines from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Prefix characters allowed through (whitelisted prefixes only)
    #[arg(long, default_value_t = DEFAULT_VISIBLE_CHARS)]
    pub visible_chars: usize,
}

pub fn execute(args: RedactArgs) -> Result<()> {
    match args.text {
        Some(text) => {
            println!("{}", redact_secret(&text, args.visible_chars));
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                println!("{}", redact_secret(&line, args.visible_chars));
            }
        }
    }

    Ok(())
}
