//! List registry styles.

use anyhow::Result;
use clap::Args;

use super::CliConfig;
use super::common::CommandContext;
use crate::utils::progress::Spinner;

/// List the styles offered by the project's registry.
#[derive(Args, Debug)]
pub struct StylesCommand {}

impl StylesCommand {
    pub async fn execute(self, ctx: &CommandContext, config: &CliConfig) -> Result<()> {
        let spinner = Spinner::start("Fetching styles", config.progress);
        let styles = ctx.run(|source| source.fetch_styles()).await;
        spinner.finish();

        for style in styles? {
            println!("{:<20} {}", style.name, style.label);
        }
        Ok(())
    }
}
