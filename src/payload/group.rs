//! Group payloads: creation and member lists.

use serde::Serialize;

use crate::error::Error;

/// Ordered list of usernames attached to a group operation.
///
/// Duplicates are not rejected locally; the backend enforces uniqueness and
/// reports per-name outcomes.
///
/// # Examples
///
/// ```
/// use chirp_sdk::payload::Members;
///
/// let members = Members::new().add("alice").add("bob");
/// assert_eq!(members.len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Members {
    usernames: Vec<String>,
}

impl Members {
    /// Creates an empty member list.
    pub fn new() -> Self {
        Members::default()
    }

    /// Appends one username, preserving insertion order.
    pub fn add(mut self, username: &str) -> Self {
        self.usernames.push(username.to_string());
        self
    }

    /// Number of usernames in the list.
    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}

impl From<&[String]> for Members {
    fn from(usernames: &[String]) -> Self {
        Members {
            usernames: usernames.to_vec(),
        }
    }
}

impl From<&[&str]> for Members {
    fn from(usernames: &[&str]) -> Self {
        Members {
            usernames: usernames.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// Payload for creating a group.
///
/// `owner` and `name` are required; the description and the initial member
/// list are optional and absent from the serialized form when never set.
///
/// # Examples
///
/// ```
/// use chirp_sdk::payload::{GroupPayload, Members};
///
/// let payload = GroupPayload::builder()
///     .owner("alice")
///     .name("rustaceans")
///     .members(Members::new().add("bob"))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct GroupPayload {
    owner_username: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    members_username: Option<Members>,
}

impl GroupPayload {
    /// Starts building a [`GroupPayload`].
    pub fn builder() -> GroupPayloadBuilder {
        GroupPayloadBuilder::default()
    }
}

/// Builder for [`GroupPayload`].
#[derive(Debug, Default)]
pub struct GroupPayloadBuilder {
    owner: Option<String>,
    name: Option<String>,
    desc: Option<String>,
    members: Option<Members>,
}

impl GroupPayloadBuilder {
    /// Username of the group owner. Required.
    pub fn owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_string());
        self
    }

    /// Display name of the group. Required.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Description of the group.
    pub fn desc(mut self, desc: &str) -> Self {
        self.desc = Some(desc.to_string());
        self
    }

    /// Initial member list, owner excluded.
    pub fn members(mut self, members: Members) -> Self {
        self.members = Some(members);
        self
    }

    /// Finalizes the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when `owner` or `name` was never set.
    pub fn build(self) -> Result<GroupPayload, Error> {
        Ok(GroupPayload {
            owner_username: self.owner.ok_or(Error::MissingField("owner"))?,
            name: self.name.ok_or(Error::MissingField("name"))?,
            desc: self.desc,
            members_username: self.members,
        })
    }
}

/// Membership change for an existing group.
///
/// An absent `add` list makes the call a pure removal, an absent `remove`
/// list a pure addition. Both being absent is forwarded to the server as an
/// empty change without local rejection, mirroring the backend's own
/// permissiveness.
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct MemberChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) add: Option<Members>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) remove: Option<Members>,
}

/// Partial update of a group's name and description.
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) desc: Option<String>,
}
