//! Wire types for the `POST /api/auth/login` contract.
//!
//! DESIGN
//! ======
//! Response bodies stay as `serde_json::Value`: the user record is opaque and
//! forwarded verbatim to storage, and failure bodies carry optional fields
//! whose shape the server does not guarantee.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Credentials posted to the auth endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a request from raw form input. The email is trimmed; the
    /// password is sent exactly as typed.
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned() }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Settled HTTP response: status plus the body parsed as JSON, if it was JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Option<Value>,
}

impl HttpReply {
    /// Build a reply from the raw body text. Unparsable bodies become `None`.
    pub fn from_raw(status: u16, raw: &str) -> Self {
        Self { status, body: serde_json::from_str(raw).ok() }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Truthy field `name` of the body, if the body is an object carrying one.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref()?.get(name).filter(|v| is_truthy(v))
    }
}

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text for a truthy field: strings verbatim, anything else as JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
