//! Uniform top-level shape of every JSON response body.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A JSON object keyed by string, e.g. `{"movie": ...}` or `{"error": ...}`.
///
/// Keys are kept sorted so the encoded form is deterministic. Values are
/// converted to [`Value`] on insertion; if a value cannot be represented as
/// JSON the first failure is remembered and returned by `serialize`, so
/// building one never panics.
#[derive(Debug, Default)]
pub struct Envelope {
    fields: Map<String, Value>,
    failure: Option<serde_json::Error>,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{"error": message}`
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().with("error", message.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.fields.insert(key.into(), value);
            }
            Err(e) => {
                if self.failure.is_none() {
                    self.failure = Some(e);
                }
            }
        }
        self
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(e) = &self.failure {
            return Err(serde::ser::Error::custom(e));
        }
        self.fields.serialize(serializer)
    }
}
