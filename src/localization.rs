use serde_json::Value;
use std::collections::HashMap;

/// Message key shown when a request fails for an unknown reason.
pub const UNEXPECTED_ERROR_KEY: &str = "alert.error.unexpected";
/// Message key shown when the client is offline.
pub const CONNECTION_ERROR_KEY: &str = "alert.error.internet-connection";
/// Prefix under which server-side application message keys are looked up.
pub const SERVER_ERRORS_PREFIX: &str = "server-errors";

const BUILTIN_CATALOG: &str = include_str!("../assets/messages.en.json");

/// Capability resolving message keys into user-facing text.
pub trait Translator: Send + Sync {
    /// Resolves `key`, interpolating `var` into a `{{var}}` slot if present.
    fn translate(&self, key: &str, var: Option<&str>) -> String;
}

/// Flat key → template catalog with dotted keys (`alert.error.unexpected`).
///
/// Unknown keys translate to the key itself.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Parses a nested JSON object, flattening nested objects into dotted keys.
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(source)?;
        let mut entries = HashMap::new();
        flatten_into(&mut entries, String::new(), &root);
        Ok(Self { entries })
    }

    /// The English catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_CATALOG).unwrap_or_else(|e| {
            crate::error!("Built-in message catalog is invalid: {e}");
            Self::default()
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> { self.entries.get(key).map(String::as_str) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                flatten_into(entries, path, child);
            }
        }
        Value::String(s) => {
            entries.insert(prefix, s.clone());
        }
        Value::Null => {}
        other => {
            entries.insert(prefix, other.to_string());
        }
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: &str, var: Option<&str>) -> String {
        let Some(template) = self.get(key) else {
            crate::event!("Missing translation for '{key}'");
            return key.to_string();
        };
        template.replace("{{var}}", var.unwrap_or_default())
    }
}
