mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn create_update_delete_over_http() -> Result<()> {
    let server = common::TestServer::start().await?;
    let client = reqwest::Client::new();
    let user = Uuid::new_v4();
    let token = common::token_for(user);
    let base = format!("{}/prescriptions", server.base_url);

    let res = client
        .post(&base)
        .bearer_auth(&token)
        .json(&json!({ "prescription": { "name": "Amoxicillin", "description": "Take twice daily", "dr": "Dr. Smith" } }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["prescription"]["_id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty(), "missing _id: {}", created);
    assert_eq!(created["prescription"]["owner"], json!(user));

    let res = client
        .patch(format!("{}/{}", base, id))
        .bearer_auth(&token)
        .json(&json!({ "prescription": { "description": "Once a day", "dr": "" } }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(format!("{}/{}", base, id)).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = res.json::<Value>().await?;
    assert_eq!(fetched["prescription"]["description"], "Once a day");
    assert_eq!(fetched["prescription"]["dr"], "Dr. Smith");

    let res = client.delete(format!("{}/{}", base, id)).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(format!("{}/{}", base, id)).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
