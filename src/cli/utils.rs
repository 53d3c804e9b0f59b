use serde_json::{json, Value};
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(target)) = (data, response.as_object_mut()) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print one prescription (`{ "prescription": {...} }` body)
pub fn output_prescription(output_format: &OutputFormat, body: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(body)?),
        OutputFormat::Text => {
            let record = body.get("prescription").unwrap_or(body);
            println!("{}", describe(record));
        }
    }
    Ok(())
}

/// Print a list of prescriptions (`{ "prescriptions": [...] }` body)
pub fn output_prescriptions(output_format: &OutputFormat, body: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(body)?),
        OutputFormat::Text => {
            let records = body
                .get("prescriptions")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            if records.is_empty() {
                println!("No prescriptions found");
            }
            for record in records {
                println!("{}", describe(record));
            }
        }
    }
    Ok(())
}

fn describe(record: &Value) -> String {
    let field = |name: &str| record.get(name).and_then(Value::as_str).unwrap_or("-");
    format!(
        "{}  {}  ({})  {}",
        field("_id"),
        field("name"),
        field("dr"),
        field("description")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_uses_dash_for_missing_fields() {
        let line = describe(&json!({ "_id": "1", "name": "Amoxicillin" }));
        assert_eq!(line, "1  Amoxicillin  (-)  -");
    }
}
