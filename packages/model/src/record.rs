use badgecraft_common::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The business fields of one accreditation (name, role, zones, photo...).
///
/// Opaque to the layout engine: placeholders only read it through their
/// `dataKey`. Key order follows the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord(Map<String, Value>);

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from JSON text; the top level must be an object
    pub fn from_json_str(text: &str) -> CommonResult<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CommonError::InvalidStructure(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn to_json_pretty(&self) -> CommonResult<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value of `key` when it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Keys available for binding, in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn first_key(&self) -> Option<&str> {
        self.keys().next()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for DataRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
