use crate::error::GoatError;
use gtmpl::Value;
use serde_json::Value as JsonValue;
use std::path::Path;

/// Decodes the `-d` argument. An absent or empty argument yields `Null`, which
/// renders as a nil dot.
pub fn parse_data(raw: Option<&str>) -> Result<JsonValue, GoatError> {
    match raw {
        Some(text) if !text.is_empty() => Ok(serde_json::from_str(text)?),
        _ => Ok(JsonValue::Null),
    }
}

pub fn read_data_file(path: &Path) -> Result<JsonValue, GoatError> {
    let text = std::fs::read_to_string(path).map_err(GoatError::DataFile)?;
    parse_data(Some(&text))
}

pub fn to_template_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Nil,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                Value::from(n.as_f64().unwrap_or_default())
            }
        }
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(to_template_value).collect()),
        JsonValue::Object(map) => Value::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), to_template_value(v)))
                .collect(),
        ),
    }
}
