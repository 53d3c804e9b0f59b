use anyhow::Context;
use reqwest::{Method, StatusCode};
use serde_json::{json, Map, Value};
use std::time::Duration;

use crate::cli::config::CliConfig;

/// Thin HTTP client for the prescriptions API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token,
        })
    }

    pub fn from_config(config: &CliConfig) -> anyhow::Result<Self> {
        Self::new(config.server.clone(), config.token.clone())
    }

    pub async fn health(&self) -> anyhow::Result<Value> {
        self.send(Method::GET, "/health", None).await.map(|v| v.unwrap_or(Value::Null))
    }

    pub async fn list(&self, mine: bool) -> anyhow::Result<Value> {
        let path = if mine { "/prescriptions/mine" } else { "/prescriptions" };
        self.send_authenticated(Method::GET, path, None).await
    }

    pub async fn show(&self, id: &str) -> anyhow::Result<Value> {
        self.send_authenticated(Method::GET, &format!("/prescriptions/{}", id), None).await
    }

    pub async fn create(&self, fields: Map<String, Value>) -> anyhow::Result<Value> {
        let body = json!({ "prescription": fields });
        self.send_authenticated(Method::POST, "/prescriptions", Some(body)).await
    }

    pub async fn update(&self, id: &str, fields: Map<String, Value>) -> anyhow::Result<()> {
        let body = json!({ "prescription": fields });
        self.send_authenticated(Method::PATCH, &format!("/prescriptions/{}", id), Some(body))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.send_authenticated(Method::DELETE, &format!("/prescriptions/{}", id), None)
            .await
            .map(|_| ())
    }

    async fn send_authenticated(&self, method: Method, path: &str, body: Option<Value>) -> anyhow::Result<Value> {
        if self.token.is_none() {
            anyhow::bail!("no token configured; run `rx config set-token <token>` first");
        }
        self.send(method, path, body).await.map(|v| v.unwrap_or(Value::Null))
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> anyhow::Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !status.is_success() {
            let value: Value = response.json().await.unwrap_or(Value::Null);
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed");
            anyhow::bail!("{} {}: {}", status.as_u16(), url, message);
        }

        let value = response
            .json::<Value>()
            .await
            .with_context(|| format!("{} {}: response is not valid JSON", status.as_u16(), url))?;
        Ok(Some(value))
    }
}
