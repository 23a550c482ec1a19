//! Admin knowledge-base form reshaping.
//!
//! Form fields arrive as flat `(name, value)` pairs. A name with a bracketed
//! part (`colors[summer]`) becomes a nested field; a plain name becomes a list
//! by splitting its value on commas.
use serde_json::{Map, Value};

/// Reshapes form pairs into the `new_data` payload for the training endpoint.
pub fn reshape_form_fields<K, V>(fields: &[(K, V)]) -> Map<String, Value>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut data = Map::new();

    for (key, value) in fields {
        let (key, value) = (key.as_ref(), value.as_ref());
        match key.split_once('[') {
            Some((main_key, rest)) => {
                let sub_key = rest.split('[').next().unwrap_or_default().replacen(']', "", 1);
                let entry = data
                    .entry(main_key.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                if let Value::Object(nested) = entry {
                    nested.insert(sub_key, Value::String(value.to_string()));
                }
            }
            None => {
                data.insert(key.to_string(), split_list(value));
            }
        }
    }

    data
}

fn split_list(value: &str) -> Value {
    Value::Array(
        value
            .split(',')
            .map(|item| Value::String(item.trim().to_string()))
            .collect(),
    )
}

/// Splits a `name=value` command-line field at the first `=`.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}
