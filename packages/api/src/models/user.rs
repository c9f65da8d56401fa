//! # User record returned by the backend
//!
//! The backend authority owns the user schema, so [`UserInfo`] keeps the
//! payload as an opaque JSON object and only offers read accessors for the
//! handful of fields the screens display (`id`, `name`, `email`).
//! It serialises transparently, so what the backend sent is exactly what the
//! session holds.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User information returned by a successful lifecycle call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UserInfo(Map<String, Value>);

impl UserInfo {
    /// Raw access to any field of the record.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.get("email").and_then(Value::as_str)
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> Option<&str> {
        self.name()
            .filter(|name| !name.is_empty())
            .or_else(|| self.email())
    }
}
