//! Payloads forwarded to the upstream scripts, and the read path back.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Fields, Record, ValidationError};

/// Body POSTed to a resource's upstream script. Creates carry no
/// action; updates carry the lookup key in `originalName`.
#[derive(Debug, Serialize)]
pub struct Outbound<R> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    #[serde(rename = "originalName", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(flatten)]
    pub record: R,
}

pub fn create_payload<R: Record>(body: &Map<String, Value>) -> Result<Outbound<R>, ValidationError> {
    let fields = Fields::new(body);
    fields.require(&R::KEY)?;

    let record = R::from_fields(&fields);
    record.check_new()?;

    Ok(Outbound {
        action: None,
        original_name: None,
        record,
    })
}

pub fn update_payload<R: Record>(body: &Map<String, Value>) -> Result<Outbound<R>, ValidationError> {
    let fields = Fields::new(body);
    let key = fields.require(&R::KEY)?;

    let original = fields.get(&R::RENAME);
    let lookup = if original.is_empty() { key } else { original };

    Ok(Outbound {
        action: Some("update"),
        original_name: Some(lookup),
        record: R::from_fields(&fields),
    })
}

pub fn delete_payload<R: Record>(body: &Map<String, Value>) -> Result<Map<String, Value>, ValidationError> {
    let key = Fields::new(body).require(&R::KEY)?;

    let mut payload = Map::new();
    payload.insert(String::from("action"), Value::from("delete"));
    payload.insert(R::KEY.name.to_string(), Value::from(key));
    Ok(payload)
}

/// Shape whatever the upstream GET returned into records. Anything that
/// is not an array of objects yields no records.
pub fn read_rows<R: Record>(value: Value) -> Vec<R> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            tracing::warn!(
                "Expected an array of {} from upstream, got {}",
                R::RESOURCE.plural(),
                kind(&other)
            );
            return Vec::new();
        }
    };

    rows.iter()
        .filter_map(Value::as_object)
        .map(|row| R::from_fields(&Fields::new(row)))
        .filter(|record| !record.key().is_empty())
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
