//! Config command - inspect and scaffold the parser vocabulary file.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use kassabon_core::models::config::ParserConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "kassabon.json")]
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = if let Some(path) = config_path {
                ParserConfig::from_file(Path::new(path))?
            } else {
                ParserConfig::default()
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { path } => {
            if path.exists() {
                anyhow::bail!("Refusing to overwrite {}", path.display());
            }
            ParserConfig::default().save(&path)?;
            println!("{} {}", style("Written to").green(), path.display());
        }
    }

    Ok(())
}
