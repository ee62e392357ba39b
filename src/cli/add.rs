//! Install components from the registry.
//!
//! Each requested component is installed with its registry dependencies.
//! Components that are already installed are overwritten with the registry's
//! current content; their dependencies are left alone.
//!
//! ```bash
//! compsync add button
//! compsync add dialog sheet
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::BTreeSet;

use super::CliConfig;
use super::common::CommandContext;
use crate::core::SyncError;
use crate::source::InstallReport;
use crate::utils::progress::Spinner;

/// Install components together with their registry dependencies.
#[derive(Args, Debug)]
pub struct AddCommand {
    /// Component names as listed by the registry.
    #[arg(required = true)]
    names: Vec<String>,
}

impl AddCommand {
    pub async fn execute(self, ctx: &CommandContext, config: &CliConfig) -> Result<()> {
        let mut missing = BTreeSet::new();

        for name in self.names {
            let spinner = Spinner::start(format!("Installing {name}"), config.progress);
            let requested = name.clone();
            let result = ctx.run(move |source| source.add_component(&requested)).await;
            spinner.finish();

            match result {
                Ok(report) => {
                    print_report(&report);
                    missing.extend(report.missing_dependencies);
                }
                Err(e) => {
                    if matches!(e.downcast_ref::<SyncError>(), Some(SyncError::ComponentNotFound { .. })) {
                        print_suggestions(ctx, &name).await;
                    }
                    return Err(e);
                }
            }
        }

        if !missing.is_empty() {
            let packages: Vec<_> = missing.into_iter().collect();
            println!(
                "\n{} {}",
                "Missing npm dependencies:".yellow().bold(),
                packages.join(" ")
            );
            println!("Install them with your package manager, e.g. `npm install {}`", packages.join(" "));
        }
        Ok(())
    }
}

fn print_report(report: &InstallReport) {
    if let Some((root, dependencies)) = report.components.split_first() {
        println!("{} {}", "✓ Installed".green(), root.bold());
        if !dependencies.is_empty() {
            println!("  with {}", dependencies.join(", "));
        }
    }
    for file in &report.files {
        println!("  {}", file.dimmed());
    }
}

async fn print_suggestions(ctx: &CommandContext, name: &str) {
    let requested = name.to_string();
    let Ok(suggestions) = ctx.run(move |source| Ok(source.suggest_components(&requested))).await
    else {
        return;
    };
    if !suggestions.is_empty() {
        eprintln!("{} {}", "Did you mean:".yellow(), suggestions.join(", "));
    }
}
