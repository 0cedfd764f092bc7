//! Message payloads for admin sending.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Body of a message: the text plus optional extra key/value pairs handed
/// through to the receiving client untouched.
///
/// # Examples
///
/// ```
/// use chirp_sdk::payload::MessageBody;
///
/// let body = MessageBody::text("hello")
///     .extra("badge", serde_json::json!(3));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageBody {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    extras: Option<BTreeMap<String, Value>>,
}

impl MessageBody {
    /// Creates a plain text body.
    pub fn text(text: &str) -> Self {
        MessageBody {
            text: text.to_string(),
            extras: None,
        }
    }

    /// Attaches one extra key/value pair.
    pub fn extra(mut self, key: &str, value: Value) -> Self {
        self.extras
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value);
        self
    }
}

/// Full payload of one message send.
///
/// Every field is required; [`MessagePayloadBuilder::build`] fails with
/// [`Error::MissingField`] on the first one that was never set.
///
/// # Examples
///
/// ```
/// use chirp_sdk::payload::{MessageBody, MessagePayload};
///
/// let payload = MessagePayload::builder()
///     .version(1)
///     .target_type("single")
///     .target_id("alice")
///     .from_type("admin")
///     .from_id("admin_user")
///     .msg_type("text")
///     .msg_body(MessageBody::text("hello"))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessagePayload {
    version: i32,
    target_type: String,
    target_id: String,
    from_type: String,
    from_id: String,
    msg_type: String,
    msg_body: MessageBody,
}

impl MessagePayload {
    /// Starts building a [`MessagePayload`].
    pub fn builder() -> MessagePayloadBuilder {
        MessagePayloadBuilder::default()
    }
}

/// Builder for [`MessagePayload`].
#[derive(Debug, Default)]
pub struct MessagePayloadBuilder {
    version: Option<i32>,
    target_type: Option<String>,
    target_id: Option<String>,
    from_type: Option<String>,
    from_id: Option<String>,
    msg_type: Option<String>,
    msg_body: Option<MessageBody>,
}

impl MessagePayloadBuilder {
    /// Protocol version; the current backend expects 1.
    pub fn version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    /// `"single"` or `"group"`.
    pub fn target_type(mut self, target_type: &str) -> Self {
        self.target_type = Some(target_type.to_string());
        self
    }

    /// Receiving username or group id.
    pub fn target_id(mut self, target_id: &str) -> Self {
        self.target_id = Some(target_id.to_string());
        self
    }

    /// Sender category; the backend currently only accepts `"admin"`.
    pub fn from_type(mut self, from_type: &str) -> Self {
        self.from_type = Some(from_type.to_string());
        self
    }

    /// Sending username.
    pub fn from_id(mut self, from_id: &str) -> Self {
        self.from_id = Some(from_id.to_string());
        self
    }

    /// Message kind; the backend currently only accepts `"text"`.
    pub fn msg_type(mut self, msg_type: &str) -> Self {
        self.msg_type = Some(msg_type.to_string());
        self
    }

    /// Message content.
    pub fn msg_body(mut self, msg_body: MessageBody) -> Self {
        self.msg_body = Some(msg_body);
        self
    }

    /// Finalizes the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first required field that
    /// was never set.
    pub fn build(self) -> Result<MessagePayload, Error> {
        Ok(MessagePayload {
            version: self.version.ok_or(Error::MissingField("version"))?,
            target_type: self.target_type.ok_or(Error::MissingField("target_type"))?,
            target_id: self.target_id.ok_or(Error::MissingField("target_id"))?,
            from_type: self.from_type.ok_or(Error::MissingField("from_type"))?,
            from_id: self.from_id.ok_or(Error::MissingField("from_id"))?,
            msg_type: self.msg_type.ok_or(Error::MissingField("msg_type"))?,
            msg_body: self.msg_body.ok_or(Error::MissingField("msg_body"))?,
        })
    }
}
