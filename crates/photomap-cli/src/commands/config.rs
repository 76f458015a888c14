//! Config commands - inspect the effective configuration

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use crate::CliContext;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub async fn execute(&self, ctx: &CliContext, config_path: &Path) -> Result<()> {
        match self {
            ConfigCommand::Show => {
                if ctx.format.is_json() {
                    ctx.format
                        .emit("configuration", &[], &serde_json::to_value(&ctx.config)?)?;
                } else {
                    // The native shape of the config file is YAML; show it as-is.
                    print!("{}", serde_yaml::to_string(&ctx.config)?);
                }
                for problem in ctx.config.validate() {
                    ctx.format.problem(&problem.to_string());
                }
                Ok(())
            }
            ConfigCommand::Path => {
                let path = config_path.display().to_string();
                let payload = serde_json::json!({ "path": path.clone() });
                ctx.format.emit(&path, &[], &payload)
            }
        }
    }
}
