use serde_json::{Map, Value};

use crate::errors::GenerationError;

/// Per-request option bag over a raw JSON object.
///
/// `null` members are treated as absent and unknown keys pass through
/// untouched; each generator supplies its own default for a missing key. A
/// value that is present but has the wrong shape fails with a per-field
/// [`GenerationError::InvalidOption`].
pub struct OptionBag<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> OptionBag<'a> {
    /// Wraps a raw options value; anything other than an object or `null`
    /// is rejected up front.
    pub fn new(options: Option<&'a Value>) -> Result<Self, GenerationError> {
        let map = match options {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                return Err(GenerationError::InvalidOption(
                    "options must be a JSON object".to_string(),
                ));
            }
        };
        Ok(Self { map })
    }

    pub const fn from_map(map: &'a Map<String, Value>) -> Self {
        Self { map: Some(map) }
    }

    pub const fn empty() -> Self {
        Self { map: None }
    }

    fn entry(&self, key: &str) -> Option<&'a Value> {
        self.map
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    }

    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool, GenerationError> {
        match self.entry(key) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| wrong_kind(key, "a boolean")),
        }
    }

    pub fn i64_or(&self, key: &str, default: i64) -> Result<i64, GenerationError> {
        match self.entry(key) {
            None => Ok(default),
            Some(value) => value.as_i64().ok_or_else(|| wrong_kind(key, "an integer")),
        }
    }

    pub fn u64_or(&self, key: &str, default: u64) -> Result<u64, GenerationError> {
        match self.entry(key) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .ok_or_else(|| wrong_kind(key, "a non-negative integer")),
        }
    }

    pub fn str_or(&self, key: &str, default: &'static str) -> Result<&'a str, GenerationError> {
        match self.entry(key) {
            None => Ok(default),
            Some(value) => value.as_str().ok_or_else(|| wrong_kind(key, "a string")),
        }
    }

    pub fn str_opt(&self, key: &str) -> Result<Option<&'a str>, GenerationError> {
        match self.entry(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| wrong_kind(key, "a string")),
        }
    }
}

fn wrong_kind(key: &str, expected: &str) -> GenerationError {
    GenerationError::InvalidOption(format!("option '{key}' must be {expected}"))
}
