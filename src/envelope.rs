// ============================================================================
// Response Envelope
// ============================================================================
//
// The single wire shape for every response body. A JSend-style envelope with
// three variants:
//   - success → `{"status":"success","data":<value>}`
//   - fail    → `{"status":"fail","data":<value>}`
//   - error   → `{"status":"error","message":<string>}`
//
// `data` is serialized eagerly into a `serde_json::Value` so the envelope is a
// single concrete (non-generic) type: the same `Envelope` can be returned from
// every handler arm regardless of the payload type.
//
// ============================================================================

use serde::Serialize;
use serde_json::Value;

/// JSend-style response envelope — the only body shape on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success { data: Value },
    Fail { data: Value },
    Error { message: String },
}

impl Envelope {
    /// Successful outcome carrying a serializable payload.
    pub fn success(data: impl Serialize) -> Self {
        Envelope::Success {
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }

    /// Expected, user-facing failure carrying a serializable payload
    /// (typically a field → message map).
    pub fn fail(data: impl Serialize) -> Self {
        Envelope::Fail {
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }

    /// Unexpected failure carrying only a top-level message.
    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }
}
