//! Remote API response helpers
//!
//! The remote API returns plain resource JSON on success and a
//! `{"message": "..."}` body on failure. Error surfacing keeps whatever
//! the server said so the UI can show it next to the preserved form.

use serde::{Deserialize, Serialize};

/// Error body returned by the remote API on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Items processed before a partial batch failure, when the
    /// endpoint reports it
    #[serde(default)]
    pub procesados: Option<u32>,
}

impl ErrorBody {
    /// Parse an error body, tolerating non-JSON payloads
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or(Self {
            message: None,
            procesados: None,
        })
    }

    /// Best-effort message for display, falling back to the raw body
    pub fn display_message<'a>(&'a self, raw: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message_body() {
        let body = ErrorBody::parse(r#"{"message":"tasa invalida"}"#);
        assert_eq!(body.message.as_deref(), Some("tasa invalida"));
        assert_eq!(body.procesados, None);
    }

    #[test]
    fn parse_partial_batch_body() {
        let body = ErrorBody::parse(r#"{"message":"fallo parcial","procesados":7}"#);
        assert_eq!(body.procesados, Some(7));
    }

    #[test]
    fn non_json_body_falls_back_to_raw() {
        let raw = "Bad Gateway";
        let body = ErrorBody::parse(raw);
        assert_eq!(body.display_message(raw), raw);
    }
}
