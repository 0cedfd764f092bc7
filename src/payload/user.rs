//! User-facing payloads: registration, profile updates, friend notes and
//! no-disturb settings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Error;

/// Credentials for registering one user or admin account.
///
/// Both fields are required; [`RegisterInfoBuilder::build`] fails with
/// [`Error::MissingField`] when either was never set.
///
/// # Examples
///
/// ```
/// use chirp_sdk::payload::RegisterInfo;
///
/// let user = RegisterInfo::builder()
///     .username("test_user")
///     .password("test_pass")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct RegisterInfo {
    username: String,
    password: String,
}

impl RegisterInfo {
    /// Starts building a [`RegisterInfo`].
    pub fn builder() -> RegisterInfoBuilder {
        RegisterInfoBuilder::default()
    }

    /// Account name to register.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Builder for [`RegisterInfo`].
#[derive(Debug, Default)]
pub struct RegisterInfoBuilder {
    username: Option<String>,
    password: Option<String>,
}

impl RegisterInfoBuilder {
    /// Sets the account name. Required.
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    /// Sets the account password. Required.
    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Finalizes the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when `username` or `password` was
    /// never set.
    pub fn build(self) -> Result<RegisterInfo, Error> {
        Ok(RegisterInfo {
            username: self.username.ok_or(Error::MissingField("username"))?,
            password: self.password.ok_or(Error::MissingField("password"))?,
        })
    }
}

/// Partial profile update for an existing user.
///
/// Every field is optional. A field that was never set is absent from the
/// serialized JSON, which the backend reads as "do not modify" - distinct
/// from setting a field to an empty string, which clears it remotely.
///
/// # Examples
///
/// ```
/// use chirp_sdk::payload::UserPayload;
///
/// let payload = UserPayload::builder()
///     .nickname("Alice")
///     .region("fr")
///     .build();
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["nickname"], "Alice");
/// assert!(json.get("birthday").is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl UserPayload {
    /// Starts building a [`UserPayload`].
    pub fn builder() -> UserPayloadBuilder {
        UserPayloadBuilder::default()
    }
}

/// Builder for [`UserPayload`]. All fields are optional, so `build()` cannot
/// fail.
#[derive(Debug, Default)]
pub struct UserPayloadBuilder {
    payload: UserPayload,
}

impl UserPayloadBuilder {
    /// Display name shown to other users.
    pub fn nickname(mut self, nickname: &str) -> Self {
        self.payload.nickname = Some(nickname.to_string());
        self
    }

    /// Birthday, formatted `yyyy-MM-dd`.
    pub fn birthday(mut self, birthday: &str) -> Self {
        self.payload.birthday = Some(birthday.to_string());
        self
    }

    /// Profile signature line.
    pub fn signature(mut self, signature: &str) -> Self {
        self.payload.signature = Some(signature.to_string());
        self
    }

    /// Gender: 0 unknown, 1 male, 2 female.
    pub fn gender(mut self, gender: i32) -> Self {
        self.payload.gender = Some(gender);
        self
    }

    /// Region or country code.
    pub fn region(mut self, region: &str) -> Self {
        self.payload.region = Some(region.to_string());
        self
    }

    /// Free-form address.
    pub fn address(mut self, address: &str) -> Self {
        self.payload.address = Some(address.to_string());
        self
    }

    /// Finalizes the payload.
    pub fn build(self) -> UserPayload {
        self.payload
    }
}

/// Note update for one friend, batched into `update_friends_note`.
///
/// The backend caps a batch at 500 entries; the SDK does not enforce the cap
/// locally.
#[derive(Clone, Debug, Serialize)]
pub struct FriendNoteUpdate {
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    others: Option<String>,
}

impl FriendNoteUpdate {
    /// Creates an update for the given friend with nothing set yet.
    pub fn new(username: &str) -> Self {
        FriendNoteUpdate {
            username: username.to_string(),
            note_name: None,
            others: None,
        }
    }

    /// Sets the display note name for this friend.
    pub fn note_name(mut self, note_name: &str) -> Self {
        self.note_name = Some(note_name.to_string());
        self
    }

    /// Sets the free-form note text for this friend.
    pub fn others(mut self, others: &str) -> Self {
        self.others = Some(others.to_string());
        self
    }
}

/// No-disturb settings update for one user.
///
/// Single conversations are keyed by username, group conversations by group
/// id. Only the lists that were explicitly touched appear in the serialized
/// form.
///
/// # Examples
///
/// ```
/// use chirp_sdk::payload::NoDisturbPayload;
///
/// let payload = NoDisturbPayload::builder()
///     .add_single_users(&["alice".to_string()])
///     .global(true)
///     .build();
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["single"]["add"][0], "alice");
/// assert!(json.get("group").is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct NoDisturbPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    single: Option<BTreeMap<&'static str, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<BTreeMap<&'static str, Vec<u64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    global: Option<i32>,
}

impl NoDisturbPayload {
    /// Starts building a [`NoDisturbPayload`].
    pub fn builder() -> NoDisturbPayloadBuilder {
        NoDisturbPayloadBuilder::default()
    }
}

/// Builder for [`NoDisturbPayload`].
#[derive(Debug, Default)]
pub struct NoDisturbPayloadBuilder {
    payload: NoDisturbPayload,
}

impl NoDisturbPayloadBuilder {
    /// Silences single conversations with the given users.
    pub fn add_single_users(mut self, usernames: &[String]) -> Self {
        self.payload
            .single
            .get_or_insert_with(BTreeMap::new)
            .insert("add", usernames.to_vec());
        self
    }

    /// Un-silences single conversations with the given users.
    pub fn remove_single_users(mut self, usernames: &[String]) -> Self {
        self.payload
            .single
            .get_or_insert_with(BTreeMap::new)
            .insert("remove", usernames.to_vec());
        self
    }

    /// Silences the given group conversations.
    pub fn add_group_ids(mut self, gids: &[u64]) -> Self {
        self.payload
            .group
            .get_or_insert_with(BTreeMap::new)
            .insert("add", gids.to_vec());
        self
    }

    /// Un-silences the given group conversations.
    pub fn remove_group_ids(mut self, gids: &[u64]) -> Self {
        self.payload
            .group
            .get_or_insert_with(BTreeMap::new)
            .insert("remove", gids.to_vec());
        self
    }

    /// Switches global no-disturb on or off. Serialized as 1 or 0.
    pub fn global(mut self, enabled: bool) -> Self {
        self.payload.global = Some(if enabled { 1 } else { 0 });
        self
    }

    /// Finalizes the payload.
    pub fn build(self) -> NoDisturbPayload {
        self.payload
    }
}
