//! Re-install outdated components.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use super::common::CommandContext;
use crate::utils::progress::Spinner;

/// Re-install components whose local files differ from the registry.
#[derive(Args, Debug)]
pub struct UpdateCommand {
    /// Components to update; every outdated component when omitted.
    names: Vec<String>,

    /// Report what would be updated without writing.
    #[arg(long)]
    dry_run: bool,
}

impl UpdateCommand {
    pub async fn execute(self, ctx: &CommandContext, config: &CliConfig) -> Result<()> {
        let spinner = Spinner::start("Checking components", config.progress);
        let requested = self.names.clone();
        let outdated = ctx
            .run(move |source| {
                if requested.is_empty() {
                    return source.list_outdated();
                }
                let mut outdated = Vec::new();
                for name in requested {
                    if !source.is_component_up_to_date(&name)? {
                        outdated.push(name);
                    }
                }
                Ok(outdated)
            })
            .await;
        spinner.finish();
        let outdated = outdated?;

        if outdated.is_empty() {
            println!("{}", "All components are up to date".green());
            return Ok(());
        }

        if self.dry_run {
            println!("Would update: {}", outdated.join(", "));
            return Ok(());
        }

        for name in outdated {
            let spinner = Spinner::start(format!("Updating {name}"), config.progress);
            let target = name.clone();
            let result = ctx.run(move |source| source.add_component(&target)).await;
            spinner.finish();
            let report = result?;
            println!("{} {} ({} files)", "✓ Updated".green(), name.bold(), report.files.len());
        }
        Ok(())
    }
}
