use crate::{DomainError, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Inbound envelope: `{"method": "...", "parameters": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendRequest {
    pub method: String,
    #[serde(default)]
    pub parameters: Value,
}

impl BackendRequest {
    pub fn new(method: &str, parameters: Value) -> Self {
        Self {
            method: method.to_string(),
            parameters,
        }
    }

    pub fn from_slice(payload: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(payload).map_err(|e| DomainError::InvalidRequest(e.to_string()))
    }

    pub fn method(&self) -> Method {
        Method::from_name(&self.method)
    }

    /// Decodes the method-specific parameter object.
    pub fn parameters_as<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        let parameters = match &self.parameters {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };
        serde_json::from_value(parameters).map_err(|e| DomainError::InvalidParameters {
            method: self.method().to_string(),
            reason: e.to_string(),
        })
    }
}

/// One answer row in array-form results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub qtype: String,
    pub qname: String,
    pub ttl: u32,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<bool>,
}

/// The `result` member of a response.
///
/// On the wire `Unset` and `Flag` are booleans and `Records` is an array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendResult {
    #[default]
    Unset,
    Flag(bool),
    Records(Vec<ResponseRecord>),
}

impl BackendResult {
    pub fn records(&self) -> &[ResponseRecord] {
        match self {
            BackendResult::Records(records) => records,
            _ => &[],
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            BackendResult::Unset => Some(false),
            BackendResult::Flag(flag) => Some(*flag),
            BackendResult::Records(_) => None,
        }
    }
}

impl Serialize for BackendResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BackendResult::Unset => serializer.serialize_bool(false),
            BackendResult::Flag(flag) => serializer.serialize_bool(*flag),
            BackendResult::Records(records) => records.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BackendResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Flag(bool),
            Records(Vec<ResponseRecord>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Flag(flag) => BackendResult::Flag(flag),
            Wire::Records(records) => BackendResult::Records(records),
        })
    }
}

/// Outbound envelope: `{"result": bool | [...], "log": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackendResponse {
    pub result: BackendResult,
    #[serde(default)]
    pub log: Vec<String>,
}

impl BackendResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: BackendResult::Flag(false),
            log: vec![message.into()],
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Newline-terminated JSON, ready to be written to a stream.
    pub fn to_json_line(&self) -> Vec<u8> {
        let mut line = serde_json::to_vec(self)
            .unwrap_or_else(|_| br#"{"result":false,"log":[]}"#.to_vec());
        line.push(b'\n');
        line
    }
}
