use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::auth::generate_jwt;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Mint a development bearer token signed with JWT_SECRET")]
    Mint {
        #[arg(long, help = "User id the token identifies")]
        user: Uuid,
        #[arg(long, help = "Hours until expiry (defaults to the server setting)")]
        hours: Option<u64>,
        #[arg(long, help = "Store the token in the CLI config")]
        save: bool,
    },
}

pub async fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Mint { user, hours, save } => {
            let security = &config::config().security;
            let hours = hours.unwrap_or(security.jwt_expiry_hours);
            let token = generate_jwt(&security.jwt_secret, user, hours)?;

            if save {
                let mut cli_config = crate::cli::config::load_config()?;
                cli_config.set_token(Some(token.clone()));
                crate::cli::config::save_config(&cli_config)?;
            }

            match output_format {
                OutputFormat::Text => println!("{}", token),
                OutputFormat::Json => output_success(
                    &output_format,
                    &format!("Token minted for user {}", user),
                    Some(json!({ "token": token, "user": user, "expires_in_hours": hours })),
                )?,
            }
            Ok(())
        }
    }
}
