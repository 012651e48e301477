use crate::Config;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Result of one command applied to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rendered {
    Single(String),
    Tokens(Vec<String>),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Single(value) => write!(f, "{}", value),
            Rendered::Tokens(tokens) => write!(f, "{}", tokens.join(" ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub input: String,
    pub output: Rendered,
}

pub fn print_records(records: &[Record], format: OutputFormat, colored: bool, echo: bool) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_records(records, colored, echo);
            Ok(())
        }
        OutputFormat::Json => print_json_records(records),
    }
}

fn print_text_records(records: &[Record], colored_output: bool, echo: bool) {
    for record in records {
        let output = record.output.to_string();

        match (echo, colored_output) {
            (false, _) => println!("{}", output),
            (true, true) => println!(
                "{} {} {}",
                record.input.dimmed(),
                "→".dimmed(),
                output.green().bold()
            ),
            (true, false) => println!("{} → {}", record.input, output),
        }
    }
}

fn print_json_records(records: &[Record]) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(records).context("Failed to serialize results as JSON")?;
    println!("{}", rendered);
    Ok(())
}

pub fn print_config(config: &Config, global: Option<&Path>, local: &Path, colored: bool) -> Result<()> {
    let location = |path: &Path| {
        let state = if path.exists() { "found" } else { "missing" };
        if colored {
            let state = if path.exists() { state.green() } else { state.yellow() };
            format!("{} ({})", path.display().to_string().cyan(), state)
        } else {
            format!("{} ({})", path.display(), state)
        }
    };

    let header = |title: &str| {
        if colored {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    };

    println!("{}", header("Config files:"));
    match global {
        Some(path) => println!("  global: {}", location(path)),
        None => println!("  global: unavailable"),
    }
    println!("  local:  {}", location(local));
    println!();
    println!("{}", header("Effective configuration:"));
    print!("{}", config.to_toml()?);

    Ok(())
}
