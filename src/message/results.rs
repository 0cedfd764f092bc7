//! Result types for message endpoints.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::http;

/// Outcome of a message send, from `POST /messages`.
#[derive(Debug, Deserialize)]
pub struct SendMessageResult {
    msg_id: u64,
    #[serde(skip)]
    original_content: String,
}

impl SendMessageResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Id assigned to the message by the server.
    pub fn msg_id(&self) -> u64 {
        self.msg_id
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}

/// One page of message history.
///
/// Messages are kept as raw JSON values: their shape varies with the message
/// type and the SDK does not constrain it. The cursor, when present, pages
/// through the remainder of the history; the server keeps it valid for 120
/// seconds and replays the originating call's page size. Expiry is entirely
/// server-side and surfaces as a request error.
#[derive(Debug, Deserialize)]
pub struct MessageListResult {
    total: Option<i64>,
    cursor: Option<String>,
    count: Option<i64>,
    #[serde(default)]
    messages: Vec<Value>,
    #[serde(skip)]
    original_content: String,
}

impl MessageListResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Total number of messages matching the query, when the server
    /// included it.
    pub fn total(&self) -> Option<i64> {
        self.total
    }

    /// Opaque token for fetching the next page, absent on the last one.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Page size reported by the server, falling back to the number of
    /// messages actually returned.
    pub fn count(&self) -> i64 {
        self.count.unwrap_or(self.messages.len() as i64)
    }

    /// Messages of this page, as raw JSON values.
    pub fn messages(&self) -> &[Value] {
        &self.messages
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_result_parses() {
        let body = r#"{"msg_id": 5242886}"#;

        let result = SendMessageResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.msg_id(), 5242886);
        assert_eq!(result.original_content(), body);
    }

    #[test]
    fn test_send_message_result_rejects_bad_body() {
        let error = SendMessageResult::from_body(r#"{"id": 1}"#.to_string()).unwrap_err();

        assert!(matches!(error, Error::Parse(_)));
    }

    #[test]
    fn test_message_list_result_parses_page() {
        let body = r#"{
            "total": 8,
            "cursor": "161jid10aab",
            "count": 2,
            "messages": [
                {"msg_type": "text", "msg_body": {"text": "hello"}},
                {"msg_type": "text", "msg_body": {"text": "world"}}
            ]
        }"#;

        let result = MessageListResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.total(), Some(8));
        assert_eq!(result.cursor(), Some("161jid10aab"));
        assert_eq!(result.count(), 2);
        assert_eq!(result.messages().len(), 2);
        assert_eq!(result.messages()[0]["msg_body"]["text"], "hello");
    }

    #[test]
    fn test_message_list_result_last_page_has_no_cursor() {
        let body = r#"{"total": 1, "count": 1, "messages": [{"msg_type": "text"}]}"#;

        let result = MessageListResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.cursor(), None);
    }

    #[test]
    fn test_message_list_count_falls_back_to_length() {
        let body = r#"{"messages": [{"a": 1}, {"b": 2}, {"c": 3}]}"#;

        let result = MessageListResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.count(), 3);
    }
}
