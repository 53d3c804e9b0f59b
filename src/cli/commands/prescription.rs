use clap::Subcommand;
use serde_json::{Map, Value};

use crate::cli::client::ApiClient;
use crate::cli::config::load_config;
use crate::cli::utils::{output_prescription, output_prescriptions, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum PrescriptionCommands {
    #[command(about = "List prescriptions")]
    List {
        #[arg(long, help = "Only prescriptions you own")]
        mine: bool,
    },

    #[command(about = "Show a prescription")]
    Show {
        #[arg(help = "Prescription id")]
        id: String,
    },

    #[command(about = "Create a prescription owned by the token's user")]
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long, help = "Prescriber")]
        dr: String,
    },

    #[command(about = "Update fields of a prescription you own")]
    Update {
        #[arg(help = "Prescription id")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, help = "Prescriber")]
        dr: Option<String>,
    },

    #[command(about = "Delete a prescription you own")]
    Delete {
        #[arg(help = "Prescription id")]
        id: String,
    },
}

pub async fn handle(cmd: PrescriptionCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::from_config(&load_config()?)?;

    match cmd {
        PrescriptionCommands::List { mine } => {
            let body = client.list(mine).await?;
            output_prescriptions(&output_format, &body)
        }
        PrescriptionCommands::Show { id } => {
            let body = client.show(&id).await?;
            output_prescription(&output_format, &body)
        }
        PrescriptionCommands::Create { name, description, dr } => {
            let fields = fields([("name", Some(name)), ("description", Some(description)), ("dr", Some(dr))]);
            let body = client.create(fields).await?;
            output_prescription(&output_format, &body)
        }
        PrescriptionCommands::Update { id, name, description, dr } => {
            let fields = fields([("name", name), ("description", description), ("dr", dr)]);
            if fields.is_empty() {
                anyhow::bail!("nothing to update; pass --name, --description or --dr");
            }
            client.update(&id, fields).await?;
            output_success(&output_format, &format!("Prescription {} updated", id), None)
        }
        PrescriptionCommands::Delete { id } => {
            client.delete(&id).await?;
            output_success(&output_format, &format!("Prescription {} deleted", id), None)
        }
    }
}

fn fields<const N: usize>(pairs: [(&str, Option<String>); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), Value::String(v))))
        .collect()
}
