//! Compare installed components with the registry.
//!
//! A component is up to date when every file the registry serves, after the
//! project's transformations, is byte-identical to the file on disk.
//!
//! ```bash
//! compsync check
//! compsync check button --format json
//! compsync check --strict   # exit code 1 when anything is outdated
//! ```

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use super::CliConfig;
use super::common::CommandContext;
use crate::utils::progress::Spinner;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report whether installed components match the registry.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Components to check; all installed components when omitted.
    names: Vec<String>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Fail when any component is outdated.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CheckEntry {
    name: String,
    up_to_date: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckCommand {
    pub async fn execute(self, ctx: &CommandContext, config: &CliConfig) -> Result<()> {
        let spinner = Spinner::start("Checking components", config.progress);
        let names = self.names.clone();
        let entries = ctx
            .run(move |source| {
                let names = if names.is_empty() { source.list_installed_components()? } else { names };
                Ok(names
                    .into_iter()
                    .map(|name| match source.is_component_up_to_date(&name) {
                        Ok(up_to_date) => CheckEntry {
                            name,
                            up_to_date,
                            error: None,
                        },
                        Err(e) => CheckEntry {
                            name,
                            up_to_date: false,
                            error: Some(e.to_string()),
                        },
                    })
                    .collect::<Vec<_>>())
            })
            .await;
        spinner.finish();
        let entries = entries?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Text => display_text(&entries),
        }

        let outdated = entries.iter().filter(|e| !e.up_to_date).count();
        if self.strict && outdated > 0 {
            bail!("{outdated} component(s) are out of date");
        }
        Ok(())
    }
}

fn display_text(entries: &[CheckEntry]) {
    if entries.is_empty() {
        println!("{}", "No components installed".yellow());
        return;
    }

    for entry in entries {
        match (&entry.error, entry.up_to_date) {
            (Some(error), _) => println!("{} {} {}", "✗".red(), entry.name, error.dimmed()),
            (None, true) => println!("{} {}", "✓".green(), entry.name),
            (None, false) => println!("{} {} {}", "↻".yellow(), entry.name, "(outdated)".yellow()),
        }
    }

    let outdated = entries.iter().filter(|e| !e.up_to_date).count();
    if outdated == 0 {
        println!("\n{}", "All components are up to date".green());
    } else {
        println!("\n{outdated} of {} component(s) outdated; run `compsync update`", entries.len());
    }
}
