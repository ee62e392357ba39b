//! Delete installed components.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use super::common::CommandContext;

/// Delete installed components from the project.
///
/// Only the named components are removed; components they depend on stay.
#[derive(Args, Debug)]
pub struct RemoveCommand {
    #[arg(required = true)]
    names: Vec<String>,
}

impl RemoveCommand {
    pub async fn execute(self, ctx: &CommandContext, _config: &CliConfig) -> Result<()> {
        for name in self.names {
            let requested = name.clone();
            let removed = ctx.run(move |source| source.remove_component(&requested)).await?;
            if removed.is_empty() {
                println!("{} {} was not installed", "⚠".yellow(), name);
            } else {
                println!("{} {}", "✓ Removed".green(), name.bold());
                for path in removed {
                    println!("  {}", path.dimmed());
                }
            }
        }
        Ok(())
    }
}
