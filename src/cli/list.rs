//! List registry or installed components.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use super::common::CommandContext;
use crate::utils::progress::Spinner;

/// List components offered by the registry, or the ones already installed.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Show installed components instead of the registry index.
    #[arg(long)]
    installed: bool,

    /// Print names only, one per line.
    #[arg(long)]
    names_only: bool,
}

impl ListCommand {
    pub async fn execute(self, ctx: &CommandContext, config: &CliConfig) -> Result<()> {
        if self.installed {
            let installed = ctx.run(|source| source.list_installed_components()).await?;
            if installed.is_empty() && !self.names_only {
                println!("{}", "No components installed".yellow());
            }
            for name in installed {
                println!("{name}");
            }
            return Ok(());
        }

        let spinner = Spinner::start("Fetching component index", config.progress);
        let available = ctx.run(|source| Ok(source.list_available_components())).await;
        spinner.finish();
        let available = available?;

        if available.is_empty() {
            if !self.names_only {
                println!("{}", "The registry returned no components".yellow());
            }
            return Ok(());
        }

        for component in available {
            if self.names_only || component.registry_dependencies.is_empty() {
                println!("{}", component.name);
            } else {
                println!(
                    "{} {}",
                    component.name,
                    format!("(needs {})", component.registry_dependencies.join(", ")).dimmed()
                );
            }
        }
        Ok(())
    }
}
