//! HTTP client for the user endpoints of the Chirp IM API.
//!
//! This module provides the [`UserClient`] struct for managing user accounts,
//! admin accounts, blacklists, friend lists and no-disturb settings.

use log::{debug, info};
use reqwest::Method;

use crate::config::ChirpConfig;
use crate::error::Error;
use crate::http::{self, ApiTransport};
use crate::payload::{FriendNoteUpdate, NoDisturbPayload, RegisterInfo, UserPayload};
use crate::user::results::{UserGroupsResult, UserInfoResult, UserListResult, UserStateResult};

/// Client for user, admin, blacklist and friend operations.
///
/// Holds no per-call state; one instance can serve any number of concurrent
/// calls.
///
/// # Examples
///
/// ```no_run
/// # use chirp_sdk::{ChirpConfig, user::UserClient};
/// # async fn run() -> Result<(), chirp_sdk::Error> {
/// let client = UserClient::new("appkey", "secret", &ChirpConfig::default())?;
/// let info = client.get_user_info("test_user").await?;
/// println!("nickname: {:?}", info.nickname());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct UserClient {
    transport: ApiTransport,
}

impl UserClient {
    /// Creates a standalone user client for one credential pair.
    pub fn new(appkey: &str, secret: &str, config: &ChirpConfig) -> Result<Self, Error> {
        Ok(UserClient {
            transport: ApiTransport::new(appkey, secret, config)?,
        })
    }

    /// Reuses an existing transport; used by the facade so all three resource
    /// clients share one connection pool.
    pub(crate) fn with_transport(transport: ApiTransport) -> Self {
        UserClient { transport }
    }

    /// Registers a batch of users.
    ///
    /// The server answers per-user outcomes, so the raw body is returned
    /// instead of a typed result.
    pub async fn register_users(&self, users: &[RegisterInfo]) -> Result<String, Error> {
        info!("register {} users", users.len());
        let body = http::to_json(&users)?;
        self.transport
            .execute(Method::POST, "/users/", &[], Some(body))
            .await
    }

    /// Registers one admin account.
    pub async fn register_admin(&self, admin: RegisterInfo) -> Result<String, Error> {
        info!("register admin {}", admin.username());
        let body = http::to_json(&admin)?;
        self.transport
            .execute(Method::POST, "/admins/", &[], Some(body))
            .await
    }

    /// Fetches the profile of one user.
    pub async fn get_user_info(&self, username: &str) -> Result<UserInfoResult, Error> {
        debug!("request user info of {username}");
        let body = self
            .transport
            .execute(Method::GET, &format!("/users/{username}"), &[], None)
            .await?;
        UserInfoResult::from_body(body)
    }

    /// Fetches the online state of one user.
    pub async fn get_user_state(&self, username: &str) -> Result<UserStateResult, Error> {
        debug!("request user state of {username}");
        let body = self
            .transport
            .execute(Method::GET, &format!("/users/{username}/userstate"), &[], None)
            .await?;
        UserStateResult::from_body(body)
    }

    /// Replaces a user's password.
    pub async fn update_password(&self, username: &str, new_password: &str) -> Result<(), Error> {
        info!("update password of {username}");
        let body = http::to_json(&serde_json::json!({ "new_password": new_password }))?;
        self.transport
            .execute(
                Method::PUT,
                &format!("/users/{username}/password"),
                &[],
                Some(body),
            )
            .await?;
        Ok(())
    }

    /// Applies a partial profile update; fields never set on the payload are
    /// left unchanged remotely.
    pub async fn update_user_info(&self, username: &str, payload: UserPayload) -> Result<(), Error> {
        info!("update user info of {username}");
        let body = http::to_json(&payload)?;
        self.transport
            .execute(Method::PUT, &format!("/users/{username}"), &[], Some(body))
            .await?;
        Ok(())
    }

    /// Fetches one page of users.
    ///
    /// # Arguments
    ///
    /// * `start` - Zero-based offset of the first user.
    /// * `count` - Page size requested from the server.
    pub async fn get_user_list(&self, start: i32, count: i32) -> Result<UserListResult, Error> {
        debug!("request user list start={start} count={count}");
        let query = [("start", start.to_string()), ("count", count.to_string())];
        let body = self
            .transport
            .execute(Method::GET, "/users/", &query, None)
            .await?;
        UserListResult::from_body(body)
    }

    /// Fetches one page of admin accounts.
    pub async fn get_admin_list(&self, start: i32, count: i32) -> Result<UserListResult, Error> {
        debug!("request admin list start={start} count={count}");
        let query = [("start", start.to_string()), ("count", count.to_string())];
        let body = self
            .transport
            .execute(Method::GET, "/admins/", &query, None)
            .await?;
        UserListResult::from_body(body)
    }

    /// Deletes one user account.
    pub async fn delete_user(&self, username: &str) -> Result<(), Error> {
        info!("delete user {username}");
        self.transport
            .execute(Method::DELETE, &format!("/users/{username}"), &[], None)
            .await?;
        Ok(())
    }

    /// Fetches all groups the user belongs to.
    pub async fn get_group_list(&self, username: &str) -> Result<UserGroupsResult, Error> {
        debug!("request groups of {username}");
        let body = self
            .transport
            .execute(Method::GET, &format!("/users/{username}/groups"), &[], None)
            .await?;
        UserGroupsResult::from_body(body)
    }

    /// Fetches the blacklist of one user.
    pub async fn get_blacklist(&self, username: &str) -> Result<Vec<UserInfoResult>, Error> {
        debug!("request blacklist of {username}");
        let body = self
            .transport
            .execute(Method::GET, &format!("/users/{username}/blacklist"), &[], None)
            .await?;
        http::parse_json(&body)
    }

    /// Adds users to the blacklist of `username`.
    pub async fn add_blacklist(&self, username: &str, users: &[String]) -> Result<String, Error> {
        info!("add {} users to blacklist of {username}", users.len());
        let body = http::to_json(&users)?;
        self.transport
            .execute(
                Method::PUT,
                &format!("/users/{username}/blacklist"),
                &[],
                Some(body),
            )
            .await
    }

    /// Removes users from the blacklist of `username`.
    pub async fn remove_blacklist(&self, username: &str, users: &[String]) -> Result<String, Error> {
        info!("remove {} users from blacklist of {username}", users.len());
        let body = http::to_json(&users)?;
        self.transport
            .execute(
                Method::DELETE,
                &format!("/users/{username}/blacklist"),
                &[],
                Some(body),
            )
            .await
    }

    /// Adds friends to `username`.
    pub async fn add_friends(&self, username: &str, users: &[String]) -> Result<String, Error> {
        info!("add {} friends to {username}", users.len());
        let body = http::to_json(&users)?;
        self.transport
            .execute(
                Method::POST,
                &format!("/users/{username}/friends"),
                &[],
                Some(body),
            )
            .await
    }

    /// Removes friends from `username`.
    pub async fn delete_friends(&self, username: &str, users: &[String]) -> Result<String, Error> {
        info!("delete {} friends from {username}", users.len());
        let body = http::to_json(&users)?;
        self.transport
            .execute(
                Method::DELETE,
                &format!("/users/{username}/friends"),
                &[],
                Some(body),
            )
            .await
    }

    /// Fetches the full friend list of one user.
    pub async fn get_friends_info(&self, username: &str) -> Result<Vec<UserInfoResult>, Error> {
        debug!("request friends of {username}");
        let body = self
            .transport
            .execute(Method::GET, &format!("/users/{username}/friends"), &[], None)
            .await?;
        http::parse_json(&body)
    }

    /// Updates note information of several friends in one call.
    ///
    /// The server caps a batch at 500 entries and rejects larger ones; no
    /// local check is performed.
    pub async fn update_friends_note(
        &self,
        username: &str,
        notes: &[FriendNoteUpdate],
    ) -> Result<String, Error> {
        info!("update {} friend notes of {username}", notes.len());
        let body = http::to_json(&notes)?;
        self.transport
            .execute(
                Method::PUT,
                &format!("/users/{username}/friends"),
                &[],
                Some(body),
            )
            .await
    }

    /// Updates no-disturb settings of one user.
    pub async fn set_no_disturb(
        &self,
        username: &str,
        payload: NoDisturbPayload,
    ) -> Result<String, Error> {
        info!("set no-disturb for {username}");
        let body = http::to_json(&payload)?;
        self.transport
            .execute(
                Method::POST,
                &format!("/users/{username}/nodisturb"),
                &[],
                Some(body),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> UserClient {
        let config = ChirpConfig::default()
            .with_api_host(base_url)
            .with_max_retry_times(0);
        UserClient::new("appkey", "secret", &config).unwrap()
    }

    #[tokio::test]
    async fn test_get_user_info() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"username": "test_user", "nickname": "Alice", "gender": 2}"#;

        server
            .mock("GET", "/v1/users/test_user")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let info = client(&server.url()).get_user_info("test_user").await.unwrap();
        assert_eq!(info.username(), "test_user");
        assert_eq!(info.nickname(), Some("Alice"));
        assert_eq!(info.original_content(), body);
    }

    #[tokio::test]
    async fn test_get_user_info_request_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/v1/users/missing_user")
            .with_status(404)
            .with_body(r#"{"error": {"code": 899003, "message": "user not exist"}}"#)
            .create_async()
            .await;

        let error = client(&server.url())
            .get_user_info("missing_user")
            .await
            .unwrap_err();
        match error {
            Error::Request { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "user not exist");
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_user_info_connection_error() {
        let error = client("http://127.0.0.1:9")
            .get_user_info("test_user")
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Connection { .. }));
        assert!(error.is_retryable());
    }

    #[tokio::test]
    async fn test_register_users_sends_array_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users/")
            .match_body(mockito::Matcher::Json(serde_json::json!([
                {"username": "test_user", "password": "test_pass"},
                {"username": "test_user1", "password": "test_pass1"}
            ])))
            .with_status(201)
            .with_body(r#"[{"username": "test_user"}, {"username": "test_user1"}]"#)
            .create_async()
            .await;

        let users = vec![
            RegisterInfo::builder()
                .username("test_user")
                .password("test_pass")
                .build()
                .unwrap(),
            RegisterInfo::builder()
                .username("test_user1")
                .password("test_pass1")
                .build()
                .unwrap(),
        ];
        let response = client(&server.url()).register_users(&users).await.unwrap();
        assert!(response.contains("test_user1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_user_info_omits_unset_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/v1/users/test_user")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"nickname": "Alice"}),
            ))
            .with_status(204)
            .create_async()
            .await;

        let payload = UserPayload::builder().nickname("Alice").build();
        client(&server.url())
            .update_user_info("test_user", payload)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_password_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/v1/users/test_user/password")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"new_password": "s3cret"}),
            ))
            .with_status(204)
            .create_async()
            .await;

        client(&server.url())
            .update_password("test_user", "s3cret")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_user_list_query() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/users/")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("start".to_owned(), "0".to_owned()),
                mockito::Matcher::UrlEncoded("count".to_owned(), "2".to_owned()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"total": 5, "start": 0, "count": 2,
                    "users": [{"username": "alice"}, {"username": "bob"}]}"#,
            )
            .create_async()
            .await;

        let list = client(&server.url()).get_user_list(0, 2).await.unwrap();
        assert_eq!(list.total(), 5);
        assert_eq!(list.users().len(), 2);
        assert!(!list.original_content().is_empty());
    }

    #[tokio::test]
    async fn test_get_blacklist_parses_bare_array() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/users/test_user/blacklist")
            .with_status(200)
            .with_body(r#"[{"username": "mallory"}]"#)
            .create_async()
            .await;

        let blacklist = client(&server.url()).get_blacklist("test_user").await.unwrap();
        assert_eq!(blacklist.len(), 1);
        assert_eq!(blacklist[0].username(), "mallory");
    }

    #[tokio::test]
    async fn test_delete_friends_sends_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/v1/users/test_user/friends")
            .match_body(mockito::Matcher::Json(serde_json::json!(["bob"])))
            .with_status(204)
            .create_async()
            .await;

        client(&server.url())
            .delete_friends("test_user", &["bob".to_string()])
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_no_disturb() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users/test_user/nodisturb")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"single": {"add": ["alice"]}}),
            ))
            .with_status(204)
            .create_async()
            .await;

        let payload = NoDisturbPayload::builder()
            .add_single_users(&["alice".to_string()])
            .build();
        client(&server.url())
            .set_no_disturb("test_user", payload)
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
