use std::fs;
use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER: &str = "http://localhost:4741";
const CONFIG_FILE: &str = "config.yaml";

/// Persistent CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            token: None,
            updated_at: None,
        }
    }
}

impl CliConfig {
    pub fn set_server(&mut self, url: &str) -> anyhow::Result<()> {
        let parsed = url::Url::parse(url)
            .map_err(|e| anyhow::anyhow!("invalid server URL '{}': {}", url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("server URL must use http or https: {}", url);
        }
        self.server = url.trim_end_matches('/').to_string();
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        self.updated_at = Some(Utc::now());
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("RX_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("rx")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

pub fn load_config() -> anyhow::Result<CliConfig> {
    let config_file = get_config_dir()?.join(CONFIG_FILE);

    if !config_file.exists() {
        return Ok(CliConfig::default());
    }

    let content = fs::read_to_string(config_file)?;
    let config: CliConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

pub fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let config_file = get_config_dir()?.join(CONFIG_FILE);

    let content = serde_yaml::to_string(config)?;
    fs::write(config_file, content)?;
    Ok(())
}
