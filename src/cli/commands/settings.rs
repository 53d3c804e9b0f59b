use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::config::{load_config, save_config};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show the current server and whether a token is stored")]
    Show,

    #[command(about = "Set the API server URL")]
    SetServer {
        #[arg(help = "Server URL, e.g. http://localhost:4741")]
        url: String,
    },

    #[command(about = "Store the bearer token used for requests")]
    SetToken {
        #[arg(help = "Bearer token")]
        token: String,
    },

    #[command(about = "Forget the stored bearer token")]
    ClearToken,

    #[command(about = "Check the configured server's /health endpoint")]
    Ping,
}

pub async fn handle(cmd: ConfigCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut config = load_config()?;

    match cmd {
        ConfigCommands::Show => match output_format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&json!({
                    "server": config.server,
                    "token": config.token.is_some(),
                    "updated_at": config.updated_at,
                }))?);
            }
            OutputFormat::Text => {
                println!("Server: {}", config.server);
                println!("Token: {}", if config.token.is_some() { "set" } else { "not set" });
            }
        },
        ConfigCommands::SetServer { url } => {
            config.set_server(&url)?;
            save_config(&config)?;
            output_success(
                &output_format,
                &format!("Server set to {}", config.server),
                Some(json!({ "server": config.server })),
            )?;
        }
        ConfigCommands::SetToken { token } => {
            config.set_token(Some(token));
            save_config(&config)?;
            output_success(&output_format, "Token stored", None)?;
        }
        ConfigCommands::ClearToken => {
            config.set_token(None);
            save_config(&config)?;
            output_success(&output_format, "Token cleared", None)?;
        }
        ConfigCommands::Ping => {
            let health = ApiClient::from_config(&config)?.health().await?;
            output_success(
                &output_format,
                &format!("{} is up", config.server),
                Some(json!({ "health": health })),
            )?;
        }
    }
    Ok(())
}
