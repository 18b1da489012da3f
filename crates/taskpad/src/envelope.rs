//! Request and response envelopes exchanged with the transport layer.

use serde_json::Value;

/// Fixed headers attached to every response.
///
/// The permissive cross-origin set is a deliberate convenience policy, not a
/// security boundary.
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST,GET,PUT,DELETE"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
];

/// Inbound request as handed over by the transport layer.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP-style method, matched case-sensitively.
    pub method: String,
    /// Raw JSON body. Absent (and ignored) for GET and OPTIONS.
    pub body: Option<String>,
}

/// Structured response returned to the transport layer unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: &'static [(&'static str, &'static str)],
    /// Serialized JSON body.
    pub body: String,
}

impl ApiResponse {
    /// A response with a JSON value body.
    pub fn json(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            headers: &RESPONSE_HEADERS,
            body: body.to_string(),
        }
    }

    /// A `{"message": ...}` response.
    pub fn message(status_code: u16, text: &str) -> Self {
        Self::json(status_code, &serde_json::json!({ "message": text }))
    }

    /// A `{"error": ...}` response describing a server fault.
    pub fn error(status_code: u16, description: &str) -> Self {
        Self::json(status_code, &serde_json::json!({ "error": description }))
    }
}
