//! Facade client composing the three resource clients.
//!
//! [`ChirpClient`] is the single object applications instantiate: one
//! credential pair, one long-lived client, a flattened method set covering
//! every remote operation. It owns no per-call state, so sharing one
//! instance across tasks is safe.

use crate::config::ChirpConfig;
use crate::error::Error;
use crate::group::{
    CreateGroupResult, GroupClient, GroupInfoResult, GroupListResult, MemberListResult,
};
use crate::http::ApiTransport;
use crate::message::{MessageClient, MessageListResult, SendMessageResult};
use crate::payload::{
    FriendNoteUpdate, GroupPayload, Members, MessageBody, MessagePayload, NoDisturbPayload,
    RegisterInfo, UserPayload,
};
use crate::user::{UserClient, UserGroupsResult, UserInfoResult, UserListResult, UserStateResult};

/// Entry point of the SDK: one client for all user, group and message
/// operations of an application.
///
/// The three resource clients behind the facade share a single connection
/// pool. Construct it once per credential pair and keep it for the lifetime
/// of the application.
///
/// # Examples
///
/// ```no_run
/// use chirp_sdk::ChirpClient;
/// use chirp_sdk::payload::MessageBody;
///
/// # async fn run() -> Result<(), chirp_sdk::Error> {
/// let client = ChirpClient::new("242780bfdd7315dc1989fe2b", "2f5ced2bef64167950e63d13")?;
///
/// let info = client.get_user_info("test_user").await?;
/// println!("nickname: {:?}", info.nickname());
///
/// let sent = client
///     .send_single_text_by_admin("test_user", "admin_user", MessageBody::text("hello"))
///     .await?;
/// println!("msg_id: {}", sent.msg_id());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ChirpClient {
    user_client: UserClient,
    group_client: GroupClient,
    message_client: MessageClient,
    send_version: i32,
}

impl ChirpClient {
    /// Creates a client with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `appkey` - The key of one application on the Chirp console.
    /// * `secret` - API master secret of the appkey.
    pub fn new(appkey: &str, secret: &str) -> Result<Self, Error> {
        Self::with_config(appkey, secret, ChirpConfig::default())
    }

    /// Creates a client with a custom configuration: private-cloud hostname,
    /// proxy, retry budget or send version.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chirp_sdk::{ChirpClient, ChirpConfig};
    ///
    /// let config = ChirpConfig::default()
    ///     .with_api_host("https://im.internal.example.com")
    ///     .with_max_retry_times(5);
    /// let client = ChirpClient::with_config("appkey", "secret", config).unwrap();
    /// ```
    pub fn with_config(appkey: &str, secret: &str, config: ChirpConfig) -> Result<Self, Error> {
        let transport = ApiTransport::new(appkey, secret, &config)?;
        Ok(ChirpClient {
            user_client: UserClient::with_transport(transport.clone()),
            group_client: GroupClient::with_transport(transport.clone()),
            message_client: MessageClient::with_transport(transport),
            send_version: config.send_version(),
        })
    }

    // --- users ---

    /// Registers a batch of users; returns the server's per-user outcomes as
    /// a raw body.
    pub async fn register_users(&self, users: &[RegisterInfo]) -> Result<String, Error> {
        self.user_client.register_users(users).await
    }

    /// Registers one admin account from loose credentials.
    pub async fn register_admin(&self, username: &str, password: &str) -> Result<String, Error> {
        let admin = RegisterInfo::builder()
            .username(username)
            .password(password)
            .build()?;
        self.user_client.register_admin(admin).await
    }

    /// Fetches the profile of one user.
    pub async fn get_user_info(&self, username: &str) -> Result<UserInfoResult, Error> {
        self.user_client.get_user_info(username).await
    }

    /// Fetches the online state of one user.
    pub async fn get_user_state(&self, username: &str) -> Result<UserStateResult, Error> {
        self.user_client.get_user_state(username).await
    }

    /// Replaces a user's password.
    pub async fn update_user_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        self.user_client.update_password(username, new_password).await
    }

    /// Applies a partial profile update; fields never set on the payload are
    /// left unchanged remotely.
    pub async fn update_user_info(&self, username: &str, payload: UserPayload) -> Result<(), Error> {
        self.user_client.update_user_info(username, payload).await
    }

    /// Fetches one page of users, `start` being a zero-based offset.
    pub async fn get_user_list(&self, start: i32, count: i32) -> Result<UserListResult, Error> {
        self.user_client.get_user_list(start, count).await
    }

    /// Fetches one page of admin accounts.
    pub async fn get_admin_list_by_appkey(
        &self,
        start: i32,
        count: i32,
    ) -> Result<UserListResult, Error> {
        self.user_client.get_admin_list(start, count).await
    }

    /// Fetches the blacklist of one user.
    pub async fn get_blacklist(&self, username: &str) -> Result<Vec<UserInfoResult>, Error> {
        self.user_client.get_blacklist(username).await
    }

    /// Adds users to the blacklist of `username`.
    pub async fn add_blacklist(&self, username: &str, users: &[String]) -> Result<String, Error> {
        self.user_client.add_blacklist(username, users).await
    }

    /// Removes users from the blacklist of `username`.
    pub async fn remove_blacklist(&self, username: &str, users: &[String]) -> Result<String, Error> {
        self.user_client.remove_blacklist(username, users).await
    }

    /// Fetches all groups the user belongs to.
    pub async fn get_group_list_by_user(&self, username: &str) -> Result<UserGroupsResult, Error> {
        self.user_client.get_group_list(username).await
    }

    /// Deletes one user account.
    pub async fn delete_user(&self, username: &str) -> Result<(), Error> {
        self.user_client.delete_user(username).await
    }

    /// Updates no-disturb settings of one user.
    pub async fn set_no_disturb(
        &self,
        username: &str,
        payload: NoDisturbPayload,
    ) -> Result<String, Error> {
        self.user_client.set_no_disturb(username, payload).await
    }

    /// Adds friends to `username`.
    pub async fn add_friends(&self, username: &str, users: &[String]) -> Result<String, Error> {
        self.user_client.add_friends(username, users).await
    }

    /// Removes friends from `username`.
    pub async fn delete_friends(&self, username: &str, users: &[String]) -> Result<String, Error> {
        self.user_client.delete_friends(username, users).await
    }

    /// Updates note information of several friends in one call.
    pub async fn update_friends_note(
        &self,
        username: &str,
        notes: &[FriendNoteUpdate],
    ) -> Result<String, Error> {
        self.user_client.update_friends_note(username, notes).await
    }

    /// Fetches the full friend list of one user.
    pub async fn get_friends_info(&self, username: &str) -> Result<Vec<UserInfoResult>, Error> {
        self.user_client.get_friends_info(username).await
    }

    // --- groups ---

    /// Fetches the description of one group.
    pub async fn get_group_info(&self, gid: u64) -> Result<GroupInfoResult, Error> {
        self.group_client.get_group_info(gid).await
    }

    /// Fetches the member list of one group.
    pub async fn get_group_members(&self, gid: u64) -> Result<MemberListResult, Error> {
        self.group_client.get_group_members(gid).await
    }

    /// Fetches one page of the application's groups.
    pub async fn get_group_list_by_appkey(
        &self,
        start: i32,
        count: i32,
    ) -> Result<GroupListResult, Error> {
        self.group_client.get_group_list(start, count).await
    }

    /// Creates a group from loose parameters, assembling the payload locally.
    pub async fn create_group(
        &self,
        owner: &str,
        name: &str,
        desc: &str,
        usernames: &[String],
    ) -> Result<CreateGroupResult, Error> {
        let payload = GroupPayload::builder()
            .owner(owner)
            .name(name)
            .desc(desc)
            .members(Members::from(usernames))
            .build()?;
        self.group_client.create_group(payload).await
    }

    /// Adds and/or removes members of one group in a single call.
    ///
    /// `add = None` makes this a pure removal and `remove = None` a pure
    /// addition; both `None` is still forwarded to the server unchanged.
    pub async fn add_or_remove_members(
        &self,
        gid: u64,
        add: Option<&[String]>,
        remove: Option<&[String]>,
    ) -> Result<(), Error> {
        self.group_client.add_or_remove_members(gid, add, remove).await
    }

    /// Deletes one group.
    pub async fn delete_group(&self, gid: u64) -> Result<(), Error> {
        self.group_client.delete_group(gid).await
    }

    /// Updates the name and/or description of one group; `None` leaves a
    /// field unchanged remotely.
    pub async fn update_group_info(
        &self,
        gid: u64,
        name: Option<&str>,
        desc: Option<&str>,
    ) -> Result<(), Error> {
        self.group_client.update_group_info(gid, name, desc).await
    }

    // --- messages ---

    /// Sends one message, assembling the payload from loose parameters.
    ///
    /// # Arguments
    ///
    /// * `version` - Protocol version; the current backend expects 1.
    /// * `target_type` - `"single"` or `"group"`.
    /// * `target_id` - Receiving username or group id.
    /// * `from_type` - Sender category; only `"admin"` is accepted today.
    /// * `from_id` - Sending username.
    /// * `msg_type` - Message kind; only `"text"` is accepted today.
    /// * `msg_body` - Message content.
    #[allow(clippy::too_many_arguments)]
    pub async fn send_message(
        &self,
        version: i32,
        target_type: &str,
        target_id: &str,
        from_type: &str,
        from_id: &str,
        msg_type: &str,
        msg_body: MessageBody,
    ) -> Result<SendMessageResult, Error> {
        let payload = MessagePayload::builder()
            .version(version)
            .target_type(target_type)
            .target_id(target_id)
            .from_type(from_type)
            .from_id(from_id)
            .msg_type(msg_type)
            .msg_body(msg_body)
            .build()?;
        self.message_client.send_message(payload).await
    }

    /// Sends a text message from an admin to a single user.
    ///
    /// Equivalent to [`send_message`](Self::send_message) with the configured
    /// send version, `target_type = "single"`, `from_type = "admin"` and
    /// `msg_type = "text"`.
    pub async fn send_single_text_by_admin(
        &self,
        target_id: &str,
        from_id: &str,
        msg_body: MessageBody,
    ) -> Result<SendMessageResult, Error> {
        self.send_message(
            self.send_version,
            "single",
            target_id,
            "admin",
            from_id,
            "text",
            msg_body,
        )
        .await
    }

    /// Sends a text message from an admin to a group.
    ///
    /// Equivalent to [`send_message`](Self::send_message) with the configured
    /// send version, `target_type = "group"`, `from_type = "admin"` and
    /// `msg_type = "text"`.
    pub async fn send_group_text_by_admin(
        &self,
        target_id: &str,
        from_id: &str,
        msg_body: MessageBody,
    ) -> Result<SendMessageResult, Error> {
        self.send_message(
            self.send_version,
            "group",
            target_id,
            "admin",
            from_id,
            "text",
            msg_body,
        )
        .await
    }

    /// Fetches one page of the application's message history; the backend
    /// keeps 60 days.
    pub async fn get_message_list(
        &self,
        count: i32,
        begin_time: &str,
        end_time: &str,
    ) -> Result<MessageListResult, Error> {
        self.message_client
            .get_message_list(count, begin_time, end_time)
            .await
    }

    /// Fetches the next history page for a cursor; cursors stay valid for
    /// 120 seconds server-side.
    pub async fn get_message_list_by_cursor(
        &self,
        cursor: &str,
    ) -> Result<MessageListResult, Error> {
        self.message_client.get_message_list_by_cursor(cursor).await
    }

    /// Fetches one page of a single user's message history.
    pub async fn get_user_messages(
        &self,
        username: &str,
        count: i32,
        begin_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<MessageListResult, Error> {
        self.message_client
            .get_user_messages(username, count, begin_time, end_time)
            .await
    }

    /// Fetches the next page of a user's history for a cursor.
    pub async fn get_user_messages_by_cursor(
        &self,
        username: &str,
        cursor: &str,
    ) -> Result<MessageListResult, Error> {
        self.message_client
            .get_user_messages_by_cursor(username, cursor)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ChirpClient {
        let config = ChirpConfig::default()
            .with_api_host(base_url)
            .with_max_retry_times(0);
        ChirpClient::with_config("appkey", "secret", config).unwrap()
    }

    #[tokio::test]
    async fn test_send_single_text_matches_explicit_send_message() {
        // Both calls must serialize to the exact same payload: the helper
        // only defaults parameters, it adds no semantics.
        let mut server = mockito::Server::new_async().await;
        let expected = serde_json::json!({
            "version": 1,
            "target_type": "single",
            "target_id": "alice",
            "from_type": "admin",
            "from_id": "admin_user",
            "msg_type": "text",
            "msg_body": {"text": "hello"}
        });
        let mock = server
            .mock("POST", "/v1/messages")
            .match_body(mockito::Matcher::Json(expected))
            .with_status(200)
            .with_body(r#"{"msg_id": 1}"#)
            .expect(2)
            .create_async()
            .await;

        let chirp = client(&server.url());
        chirp
            .send_single_text_by_admin("alice", "admin_user", MessageBody::text("hello"))
            .await
            .unwrap();
        chirp
            .send_message(
                1,
                "single",
                "alice",
                "admin",
                "admin_user",
                "text",
                MessageBody::text("hello"),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_group_text_targets_group() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"target_type": "group", "target_id": "12064"}),
            ))
            .with_status(200)
            .with_body(r#"{"msg_id": 2}"#)
            .create_async()
            .await;

        client(&server.url())
            .send_group_text_by_admin("12064", "admin_user", MessageBody::text("hi all"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_configured_send_version_is_used() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"version": 2}),
            ))
            .with_status(200)
            .with_body(r#"{"msg_id": 3}"#)
            .create_async()
            .await;

        let config = ChirpConfig::default()
            .with_api_host(&server.url())
            .with_max_retry_times(0)
            .with_send_version(2);
        let chirp = ChirpClient::with_config("appkey", "secret", config).unwrap();
        chirp
            .send_single_text_by_admin("alice", "admin_user", MessageBody::text("v2"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_admin_assembles_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/admins/")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"username": "boss", "password": "s3cret"}),
            ))
            .with_status(201)
            .with_body("")
            .create_async()
            .await;

        client(&server.url())
            .register_admin("boss", "s3cret")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_group_assembles_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/groups/")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "owner_username": "alice",
                "name": "rustaceans",
                "desc": "crab talk",
                "members_username": ["bob", "carol"]
            })))
            .with_status(201)
            .with_body(r#"{"gid": 12065}"#)
            .create_async()
            .await;

        let created = client(&server.url())
            .create_group(
                "alice",
                "rustaceans",
                "crab talk",
                &["bob".to_string(), "carol".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(created.gid(), 12065);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_facade_delegates_user_info() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/users/test_user")
            .with_status(200)
            .with_body(r#"{"username": "test_user"}"#)
            .create_async()
            .await;

        let info = client(&server.url()).get_user_info("test_user").await.unwrap();
        assert_eq!(info.username(), "test_user");
    }
}
