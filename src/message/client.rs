//! HTTP client for the message endpoints of the Chirp IM API.

use log::{debug, info};
use reqwest::Method;

use crate::config::ChirpConfig;
use crate::error::Error;
use crate::http::{self, ApiTransport};
use crate::message::results::{MessageListResult, SendMessageResult};
use crate::payload::MessagePayload;

/// Client for message sending and history browsing.
///
/// Holds no per-call state; one instance can serve any number of concurrent
/// calls.
///
/// # Examples
///
/// ```no_run
/// # use chirp_sdk::{ChirpConfig, message::MessageClient};
/// # use chirp_sdk::payload::{MessageBody, MessagePayload};
/// # async fn run() -> Result<(), chirp_sdk::Error> {
/// let client = MessageClient::new("appkey", "secret", &ChirpConfig::default())?;
/// let payload = MessagePayload::builder()
///     .version(1)
///     .target_type("single")
///     .target_id("alice")
///     .from_type("admin")
///     .from_id("admin_user")
///     .msg_type("text")
///     .msg_body(MessageBody::text("hello"))
///     .build()?;
/// let sent = client.send_message(payload).await?;
/// println!("msg_id: {}", sent.msg_id());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct MessageClient {
    transport: ApiTransport,
}

impl MessageClient {
    /// Creates a standalone message client for one credential pair.
    pub fn new(appkey: &str, secret: &str, config: &ChirpConfig) -> Result<Self, Error> {
        Ok(MessageClient {
            transport: ApiTransport::new(appkey, secret, config)?,
        })
    }

    pub(crate) fn with_transport(transport: ApiTransport) -> Self {
        MessageClient { transport }
    }

    /// Sends one message from a prebuilt payload.
    pub async fn send_message(&self, payload: MessagePayload) -> Result<SendMessageResult, Error> {
        info!("send message");
        let body = http::to_json(&payload)?;
        let response = self
            .transport
            .execute(Method::POST, "/messages", &[], Some(body))
            .await?;
        SendMessageResult::from_body(response)
    }

    /// Fetches one page of the application's message history.
    ///
    /// The backend keeps 60 days of history.
    ///
    /// # Arguments
    ///
    /// * `count` - Page size.
    /// * `begin_time` - Inclusive lower bound, formatted `yyyy-MM-dd HH:mm:ss`.
    /// * `end_time` - Inclusive upper bound, same format.
    pub async fn get_message_list(
        &self,
        count: i32,
        begin_time: &str,
        end_time: &str,
    ) -> Result<MessageListResult, Error> {
        debug!("request message list count={count}");
        let query = [
            ("count", count.to_string()),
            ("begin_time", begin_time.to_string()),
            ("end_time", end_time.to_string()),
        ];
        let body = self
            .transport
            .execute(Method::GET, "/messages", &query, None)
            .await?;
        MessageListResult::from_body(body)
    }

    /// Fetches the next history page for a cursor returned by
    /// [`get_message_list`](Self::get_message_list).
    ///
    /// The server honours a cursor for 120 seconds and replays the
    /// originating call's page size; an expired cursor surfaces as a request
    /// error.
    pub async fn get_message_list_by_cursor(
        &self,
        cursor: &str,
    ) -> Result<MessageListResult, Error> {
        debug!("request message list with cursor");
        let query = [("cursor", cursor.to_string())];
        let body = self
            .transport
            .execute(Method::GET, "/messages", &query, None)
            .await?;
        MessageListResult::from_body(body)
    }

    /// Fetches one page of a single user's message history.
    ///
    /// # Arguments
    ///
    /// * `username` - Account whose history is browsed.
    /// * `count` - Page size.
    /// * `begin_time` - Optional inclusive lower bound, `yyyy-MM-dd HH:mm:ss`.
    /// * `end_time` - Optional inclusive upper bound, same format.
    pub async fn get_user_messages(
        &self,
        username: &str,
        count: i32,
        begin_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<MessageListResult, Error> {
        debug!("request messages of {username} count={count}");
        let mut query = vec![("count", count.to_string())];
        if let Some(begin_time) = begin_time {
            query.push(("begin_time", begin_time.to_string()));
        }
        if let Some(end_time) = end_time {
            query.push(("end_time", end_time.to_string()));
        }
        let body = self
            .transport
            .execute(
                Method::GET,
                &format!("/users/{username}/messages"),
                &query,
                None,
            )
            .await?;
        MessageListResult::from_body(body)
    }

    /// Fetches the next page of a user's history for a cursor returned by
    /// [`get_user_messages`](Self::get_user_messages).
    pub async fn get_user_messages_by_cursor(
        &self,
        username: &str,
        cursor: &str,
    ) -> Result<MessageListResult, Error> {
        debug!("request messages of {username} with cursor");
        let query = [("cursor", cursor.to_string())];
        let body = self
            .transport
            .execute(
                Method::GET,
                &format!("/users/{username}/messages"),
                &query,
                None,
            )
            .await?;
        MessageListResult::from_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::MessageBody;

    fn client(base_url: &str) -> MessageClient {
        let config = ChirpConfig::default()
            .with_api_host(base_url)
            .with_max_retry_times(0);
        MessageClient::new("appkey", "secret", &config).unwrap()
    }

    fn text_payload() -> MessagePayload {
        MessagePayload::builder()
            .version(1)
            .target_type("single")
            .target_id("alice")
            .from_type("admin")
            .from_id("admin_user")
            .msg_type("text")
            .msg_body(MessageBody::text("hello"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_send_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "version": 1,
                "target_type": "single",
                "target_id": "alice",
                "from_type": "admin",
                "from_id": "admin_user",
                "msg_type": "text",
                "msg_body": {"text": "hello"}
            })))
            .with_status(200)
            .with_body(r#"{"msg_id": 5242886}"#)
            .create_async()
            .await;

        let sent = client(&server.url()).send_message(text_payload()).await.unwrap();
        assert_eq!(sent.msg_id(), 5242886);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_message_list_query() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/messages")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("count".to_owned(), "10".to_owned()),
                mockito::Matcher::UrlEncoded(
                    "begin_time".to_owned(),
                    "2024-06-01 00:00:00".to_owned(),
                ),
                mockito::Matcher::UrlEncoded(
                    "end_time".to_owned(),
                    "2024-06-02 00:00:00".to_owned(),
                ),
            ]))
            .with_status(200)
            .with_body(r#"{"total": 1, "cursor": "abc", "count": 1, "messages": [{}]}"#)
            .create_async()
            .await;

        let list = client(&server.url())
            .get_message_list(10, "2024-06-01 00:00:00", "2024-06-02 00:00:00")
            .await
            .unwrap();
        assert_eq!(list.cursor(), Some("abc"));
    }

    #[tokio::test]
    async fn test_cursor_replays_original_page_size() {
        // The backend keeps a cursor valid for 120 s and replays the
        // originating call's page size. The stub serves the same fixed page
        // for every cursor hit; both reads must agree on the count.
        let mut server = mockito::Server::new_async().await;
        let page = r#"{"total": 6, "cursor": "161jid10aab", "count": 3,
                       "messages": [{"a": 1}, {"b": 2}, {"c": 3}]}"#;
        server
            .mock("GET", "/v1/messages")
            .match_query(mockito::Matcher::UrlEncoded(
                "cursor".to_owned(),
                "161jid10aab".to_owned(),
            ))
            .with_status(200)
            .with_body(page)
            .expect(2)
            .create_async()
            .await;

        let message_client = client(&server.url());
        let first = message_client
            .get_message_list_by_cursor("161jid10aab")
            .await
            .unwrap();
        let second = message_client
            .get_message_list_by_cursor("161jid10aab")
            .await
            .unwrap();
        assert_eq!(first.count(), second.count());
        assert_eq!(first.messages().len(), second.messages().len());
    }

    #[tokio::test]
    async fn test_expired_cursor_surfaces_request_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/messages")
            .match_query(mockito::Matcher::UrlEncoded(
                "cursor".to_owned(),
                "stale".to_owned(),
            ))
            .with_status(400)
            .with_body(r#"{"error": {"code": 899052, "message": "cursor expired"}}"#)
            .create_async()
            .await;

        let error = client(&server.url())
            .get_message_list_by_cursor("stale")
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Request { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_get_user_messages_optional_times_omitted() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/users/test_user/messages")
            .match_query(mockito::Matcher::UrlEncoded(
                "count".to_owned(),
                "5".to_owned(),
            ))
            .with_status(200)
            .with_body(r#"{"count": 0, "messages": []}"#)
            .create_async()
            .await;

        let list = client(&server.url())
            .get_user_messages("test_user", 5, None, None)
            .await
            .unwrap();
        assert_eq!(list.count(), 0);
        mock.assert_async().await;
    }
}
