//! JSON bodies exchanged with the backend.
//!
//! `POST /api/message` takes a [`MessageRequest`] and answers with a
//! [`MessageReply`]; `GET /api/stats` answers with a [`StatsReply`].
//! Every reply field is optional so partial bodies still decode.

use serde::{Deserialize, Deserializer, Serialize};

use crate::savings::SavingsStats;

/// Shown when a successful reply carries neither a response nor an error.
pub const NO_RESPONSE_FALLBACK: &str = "Error: No response";

/// Body of `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

impl MessageRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reply from `POST /api/message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_savings"
    )]
    pub savings: Option<SavingsStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageReply {
    /// Text of the bot bubble for this reply.
    ///
    /// An absent `response` falls back to the backend's `error` string,
    /// then to [`NO_RESPONSE_FALLBACK`]. An empty `response` is kept as is.
    pub fn display_text(&self) -> String {
        match (&self.response, &self.error) {
            (Some(response), _) => response.clone(),
            (None, Some(error)) => format!("Error: {error}"),
            (None, None) => NO_RESPONSE_FALLBACK.to_string(),
        }
    }
}

/// Reply from `GET /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsReply {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_savings"
    )]
    pub savings: Option<SavingsStats>,
}

/// Decode `savings` without failing the surrounding reply.
///
/// Anything that is not an object (a string, a number, an array) is
/// dropped with a warning so the reply text still reaches the user.
fn lenient_savings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SavingsStats>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match serde_json::from_value(value) {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!("Ignoring malformed savings object: {}", e);
            None
        }
    }))
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Extract the `error` string from a raw body, if it has one.
    pub fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&MessageRequest::new("hello")).unwrap();
        assert_eq!(body, r#"{"message":"hello"}"#);
    }

    #[test]
    fn test_reply_with_response_only() {
        let reply: MessageReply = serde_json::from_str(r#"{"response":"hi there"}"#).unwrap();
        assert_eq!(reply.display_text(), "hi there");
        assert!(reply.savings.is_none());
    }

    #[test]
    fn test_empty_reply_falls_back() {
        let reply: MessageReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.display_text(), "Error: No response");
    }

    #[test]
    fn test_error_only_reply() {
        let reply: MessageReply =
            serde_json::from_str(r#"{"error":"An error occurred"}"#).unwrap();
        assert_eq!(reply.display_text(), "Error: An error occurred");
    }

    #[test]
    fn test_empty_response_is_not_replaced() {
        let reply: MessageReply = serde_json::from_str(r#"{"response":""}"#).unwrap();
        assert_eq!(reply.display_text(), "");
    }

    #[test]
    fn test_full_reply() {
        let reply: MessageReply = serde_json::from_str(
            r#"{
                "response": "done",
                "summary": "short",
                "savings": {"original_chars": 100, "summarized_chars": 40, "saved": 60, "percentage": 60.0}
            }"#,
        )
        .unwrap();
        assert_eq!(reply.summary.as_deref(), Some("short"));
        let savings = reply.savings.unwrap();
        assert_eq!(savings.original_chars, 100);
        assert_eq!(savings.summarized_chars, 40);
        assert_eq!(savings.saved, 60);
    }

    #[test]
    fn test_malformed_savings_keeps_response() {
        let reply: MessageReply = serde_json::from_str(
            r#"{"response":"hi there","savings":{"original_chars":100,"summarized_chars":40,"saved":null,"percentage":60}}"#,
        )
        .unwrap();
        assert_eq!(reply.display_text(), "hi there");
        let savings = reply.savings.unwrap();
        assert_eq!(savings.original_chars, 100);
        assert_eq!(savings.saved, 0);
    }

    #[test]
    fn test_non_object_savings_is_dropped() {
        let reply: MessageReply =
            serde_json::from_str(r#"{"response":"hi there","savings":"n/a"}"#).unwrap();
        assert_eq!(reply.display_text(), "hi there");
        assert!(reply.savings.is_none());

        let reply: MessageReply =
            serde_json::from_str(r#"{"response":"ok","savings":null}"#).unwrap();
        assert!(reply.savings.is_none());

        let stats: StatsReply = serde_json::from_str(r#"{"savings":[1,2,3]}"#).unwrap();
        assert!(stats.savings.is_none());
    }

    #[test]
    fn test_stats_reply_without_savings() {
        let reply: StatsReply = serde_json::from_str(r#"{"uptime": 12}"#).unwrap();
        assert!(reply.savings.is_none());
    }

    #[test]
    fn test_error_body_detail() {
        assert_eq!(
            ErrorBody::detail_from(r#"{"error":"Internal server error"}"#).as_deref(),
            Some("Internal server error")
        );
        assert_eq!(ErrorBody::detail_from("<html>502</html>"), None);
        assert_eq!(ErrorBody::detail_from(r#"{"error":""}"#), None);
    }
}
