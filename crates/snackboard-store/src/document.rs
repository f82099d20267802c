use serde_json::{Map, Value};

/// The field map of a stored document.
pub type Fields = Map<String, Value>;

/// A document read back from a collection: its string id plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

const SERVER_TIMESTAMP_KEY: &str = "__serverTimestamp";

/// Sentinel value for a server-assigned timestamp.
///
/// Write it as a field value and the backend replaces it with the store's
/// current time (an RFC 3339 string) at write time. The resolved value is
/// opaque to callers until read back.
pub fn server_timestamp() -> Value {
    let mut marker = Map::new();
    marker.insert(SERVER_TIMESTAMP_KEY.to_string(), Value::Bool(true));
    Value::Object(marker)
}

/// Whether a field value is the [`server_timestamp`] sentinel.
pub fn is_server_timestamp(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.len() == 1 && map.get(SERVER_TIMESTAMP_KEY) == Some(&Value::Bool(true))
        }
        _ => false,
    }
}
