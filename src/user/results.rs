//! Result types for user endpoints.
//!
//! Each result is a read-only view over one parsed response body. The raw,
//! unparsed body stays available through `original_content()` for callers
//! needing fields the typed accessors omit.

use std::fmt;

use serde::Deserialize;

use crate::error::Error;
use crate::group::GroupInfoResult;
use crate::http;

/// Profile of one user, from `GET /users/{username}`.
///
/// Also the element type of blacklist and friend listings.
#[derive(Debug, Deserialize)]
pub struct UserInfoResult {
    username: String,
    nickname: Option<String>,
    birthday: Option<String>,
    gender: Option<i32>,
    signature: Option<String>,
    region: Option<String>,
    address: Option<String>,
    ctime: Option<String>,
    mtime: Option<String>,
    #[serde(skip)]
    original_content: String,
}

impl UserInfoResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Display name, when set.
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Birthday, formatted `yyyy-MM-dd`, when set.
    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    /// Gender: 0 unknown, 1 male, 2 female.
    pub fn gender(&self) -> Option<i32> {
        self.gender
    }

    /// Profile signature line, when set.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Region or country code, when set.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Free-form address, when set.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Creation timestamp, when the server included it.
    pub fn ctime(&self) -> Option<&str> {
        self.ctime.as_deref()
    }

    /// Last modification timestamp, when the server included it.
    pub fn mtime(&self) -> Option<&str> {
        self.mtime.as_deref()
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}

impl fmt::Display for UserInfoResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "username={}, nickname={:?}, gender={:?}",
            self.username, self.nickname, self.gender
        )
    }
}

/// Online state of one user, from `GET /users/{username}/userstate`.
#[derive(Debug, Deserialize)]
pub struct UserStateResult {
    online: bool,
    #[serde(skip)]
    original_content: String,
}

impl UserStateResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Whether the user currently has an online session.
    pub fn online(&self) -> bool {
        self.online
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}

/// One page of users, from the user and admin listing endpoints.
#[derive(Debug, Deserialize)]
pub struct UserListResult {
    total: i64,
    start: i64,
    count: i64,
    users: Vec<UserInfoResult>,
    #[serde(skip)]
    original_content: String,
}

impl UserListResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Total number of users on the application.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Zero-based offset this page starts at.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Number of users in this page.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Users of this page.
    pub fn users(&self) -> &[UserInfoResult] {
        &self.users
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}

/// All groups a user belongs to, from `GET /users/{username}/groups`.
///
/// The wire format is a bare JSON array.
#[derive(Debug)]
pub struct UserGroupsResult {
    groups: Vec<GroupInfoResult>,
    original_content: String,
}

impl UserGroupsResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let groups = http::parse_json(&body)?;
        Ok(UserGroupsResult {
            groups,
            original_content: body,
        })
    }

    /// Groups the user belongs to.
    pub fn groups(&self) -> &[GroupInfoResult] {
        &self.groups
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}
