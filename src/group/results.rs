//! Result types for group endpoints.

use std::fmt;

use serde::Deserialize;

use crate::error::Error;
use crate::http;

/// Description of one group, from `GET /groups/{gid}`.
///
/// Also the element type of the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct GroupInfoResult {
    gid: u64,
    name: Option<String>,
    desc: Option<String>,
    appkey: Option<String>,
    max_member_count: Option<i64>,
    ctime: Option<String>,
    mtime: Option<String>,
    #[serde(skip)]
    original_content: String,
}

impl GroupInfoResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Numeric group id.
    pub fn gid(&self) -> u64 {
        self.gid
    }

    /// Display name of the group.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description of the group.
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// Application the group belongs to.
    pub fn appkey(&self) -> Option<&str> {
        self.appkey.as_deref()
    }

    /// Member capacity, when the server included it.
    pub fn max_member_count(&self) -> Option<i64> {
        self.max_member_count
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

impl fmt::Display for GroupInfoResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "gid={}, name={:?}", self.gid, self.name)
    }
}

/// Outcome of a group creation, from `POST /groups/`.
#[derive(Debug, Deserialize)]
pub struct CreateGroupResult {
    gid: u64,
    owner_username: Option<String>,
    name: Option<String>,
    desc: Option<String>,
    #[serde(skip)]
    original_content: String,
}

impl CreateGroupResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Id assigned to the new group.
    pub fn gid(&self) -> u64 {
        self.gid
    }

    /// Owner of the new group.
    pub fn owner_username(&self) -> Option<&str> {
        self.owner_username.as_deref()
    }

    /// Display name the group was created with.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description the group was created with.
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}

/// One member of a group.
#[derive(Debug, Deserialize)]
pub struct MemberResult {
    username: String,
    nickname: Option<String>,
    avatar: Option<String>,
    flag: Option<i32>,
}

impl MemberResult {
    /// Account name of the member.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Display name of the member, when set.
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Avatar media id of the member, when set.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Role flag: 1 for the owner, 0 for ordinary members.
    pub fn flag(&self) -> Option<i32> {
        self.flag
    }
}

/// Members of one group, from `GET /groups/{gid}/members`.
///
/// The wire format is a bare JSON array.
#[derive(Debug)]
pub struct MemberListResult {
    members: Vec<MemberResult>,
    original_content: String,
}

impl MemberListResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let members = http::parse_json(&body)?;
        Ok(MemberListResult {
            members,
            original_content: body,
        })
    }

    /// Members of the group.
    pub fn members(&self) -> &[MemberResult] {
        &self.members
    }

    /// Raw, unparsed response body.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }
}

/// One page of groups, from `GET /groups/`.
#[derive(Debug, Deserialize)]
pub struct GroupListResult {
    total: i64,
    start: i64,
    count: i64,
    groups: Vec<GroupInfoResult>,
    #[serde(skip)]
    original_content: String,
}

impl GroupListResult {
    pub(crate) fn from_body(body: String) -> Result<Self, Error> {
        let mut result: Self = http::parse_json(&body)?;
        result.original_content = body;
        Ok(result)
    }

    /// Total number of groups on the application.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Zero-based offset this page starts at.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Number of groups in this page.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Groups of this page.
    pub fn groups(&self) -> &[GroupInfoResult] {
        &self.groups
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
    fn test_group_info_result_parses() {
        let body = r#"{
            "gid": 12064,
            "name": "rustaceans",
            "desc": "crab talk",
            "appkey": "242780bfdd7315dc1989fe2b",
            "max_member_count": 500,
            "ctime": "2024-01-01 00:00:00",
            "mtime": "2024-06-01 00:00:00"
        }"#;

        let result = GroupInfoResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.gid(), 12064);
        assert_eq!(result.name(), Some("rustaceans"));
        assert_eq!(result.max_member_count(), Some(500));
        assert_eq!(result.original_content(), body);
    }

    #[test]
    fn test_group_info_result_display() {
        let result =
            GroupInfoResult::from_body(r#"{"gid": 7, "name": "seven"}"#.to_string()).unwrap();

        assert_eq!(format!("{result}"), r#"gid=7, name=Some("seven")"#);
    }

    #[test]
    fn test_create_group_result_parses() {
        let body = r#"{"gid": 12065, "owner_username": "alice", "name": "rustaceans"}"#;

        let result = CreateGroupResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.gid(), 12065);
        assert_eq!(result.owner_username(), Some("alice"));
    }

    #[test]
    fn test_member_list_result_parses_bare_array() {
        let body = r#"[
            {"username": "alice", "flag": 1},
            {"username": "bob", "nickname": "Bobby", "flag": 0}
        ]"#;

        let result = MemberListResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.members().len(), 2);
        assert_eq!(result.members()[0].flag(), Some(1));
        assert_eq!(result.members()[1].nickname(), Some("Bobby"));
        assert_eq!(result.original_content(), body);
    }

    #[test]
    fn test_group_list_result_parses_page() {
        let body = r#"{
            "total": 3, "start": 0, "count": 1,
            "groups": [{"gid": 12064, "name": "rustaceans"}]
        }"#;

        let result = GroupListResult::from_body(body.to_string()).unwrap();
        assert_eq!(result.total(), 3);
        assert_eq!(result.groups()[0].gid(), 12064);
    }

    #[test]
    fn test_group_list_result_rejects_bad_body() {
        let error = GroupListResult::from_body("[]".to_string()).unwrap_err();

        assert!(matches!(error, Error::Parse(_)));
    }
}
