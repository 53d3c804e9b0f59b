pub mod client;
pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "rx")]
#[command(about = "rx - command-line client for the Prescription API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Bearer token utilities")]
    Token {
        #[command(subcommand)]
        cmd: commands::token::TokenCommands,
    },

    #[command(about = "CLI settings: server URL and stored token")]
    Config {
        #[command(subcommand)]
        cmd: commands::settings::ConfigCommands,
    },

    #[command(about = "Prescription operations", visible_alias = "p")]
    Prescription {
        #[command(subcommand)]
        cmd: commands::prescription::PrescriptionCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token { cmd } => commands::token::handle(cmd, output_format).await,
        Commands::Config { cmd } => commands::settings::handle(cmd, output_format).await,
        Commands::Prescription { cmd } => commands::prescription::handle(cmd, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_update_with_partial_fields() {
        let cli = Cli::try_parse_from(["rx", "--json", "prescription", "update", "abc", "--dr", "Dr. Who"]).unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::Prescription {
                cmd: commands::prescription::PrescriptionCommands::Update { id, name, dr, .. },
            } => {
                assert_eq!(id, "abc");
                assert_eq!(name, None);
                assert_eq!(dr.as_deref(), Some("Dr. Who"));
            }
            _ => panic!("expected prescription update"),
        }
    }
}
