//! HTTP client for the group endpoints of the Chirp IM API.

use log::{debug, info, warn};
use reqwest::Method;

use crate::config::ChirpConfig;
use crate::error::Error;
use crate::group::results::{CreateGroupResult, GroupInfoResult, GroupListResult, MemberListResult};
use crate::http::{self, ApiTransport};
use crate::payload::group::{GroupUpdate, MemberChange};
use crate::payload::{GroupPayload, Members};

/// Client for group management operations.
///
/// Holds no per-call state; one instance can serve any number of concurrent
/// calls.
///
/// # Examples
///
/// ```no_run
/// # use chirp_sdk::{ChirpConfig, group::GroupClient};
/// # async fn run() -> Result<(), chirp_sdk::Error> {
/// let client = GroupClient::new("appkey", "secret", &ChirpConfig::default())?;
/// let info = client.get_group_info(12064).await?;
/// println!("group: {}", info);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GroupClient {
    transport: ApiTransport,
}

impl GroupClient {
    /// Creates a standalone group client for one credential pair.
    pub fn new(appkey: &str, secret: &str, config: &ChirpConfig) -> Result<Self, Error> {
        Ok(GroupClient {
            transport: ApiTransport::new(appkey, secret, config)?,
        })
    }

    pub(crate) fn with_transport(transport: ApiTransport) -> Self {
        GroupClient { transport }
    }

    /// Fetches the description of one group.
    pub async fn get_group_info(&self, gid: u64) -> Result<GroupInfoResult, Error> {
        debug!("request group info of {gid}");
        let body = self
            .transport
            .execute(Method::GET, &format!("/groups/{gid}"), &[], None)
            .await?;
        GroupInfoResult::from_body(body)
    }

    /// Fetches the member list of one group.
    pub async fn get_group_members(&self, gid: u64) -> Result<MemberListResult, Error> {
        debug!("request members of group {gid}");
        let body = self
            .transport
            .execute(Method::GET, &format!("/groups/{gid}/members"), &[], None)
            .await?;
        MemberListResult::from_body(body)
    }

    /// Fetches one page of the application's groups.
    ///
    /// # Arguments
    ///
    /// * `start` - Zero-based offset of the first group.
    /// * `count` - Page size requested from the server.
    pub async fn get_group_list(&self, start: i32, count: i32) -> Result<GroupListResult, Error> {
        debug!("request group list start={start} count={count}");
        let query = [("start", start.to_string()), ("count", count.to_string())];
        let body = self
            .transport
            .execute(Method::GET, "/groups/", &query, None)
            .await?;
        GroupListResult::from_body(body)
    }

    /// Creates a group from a prebuilt payload.
    pub async fn create_group(&self, payload: GroupPayload) -> Result<CreateGroupResult, Error> {
        info!("create group");
        let body = http::to_json(&payload)?;
        let response = self
            .transport
            .execute(Method::POST, "/groups/", &[], Some(body))
            .await?;
        CreateGroupResult::from_body(response)
    }

    /// Adds and/or removes members of one group in a single call.
    ///
    /// An absent `add` list makes this a pure removal, an absent `remove`
    /// list a pure addition. Both absent is forwarded to the server as an
    /// empty change rather than rejected locally; a warning is logged since
    /// the round trip achieves nothing.
    pub async fn add_or_remove_members(
        &self,
        gid: u64,
        add: Option<&[String]>,
        remove: Option<&[String]>,
    ) -> Result<(), Error> {
        info!("change members of group {gid}");
        if add.is_none() && remove.is_none() {
            warn!("member change for group {gid} has neither additions nor removals");
        }
        let change = MemberChange {
            add: add.map(Members::from),
            remove: remove.map(Members::from),
        };
        let body = http::to_json(&change)?;
        self.transport
            .execute(
                Method::POST,
                &format!("/groups/{gid}/members"),
                &[],
                Some(body),
            )
            .await?;
        Ok(())
    }

    /// Updates the name and/or description of one group.
    ///
    /// A `None` argument leaves the corresponding field unchanged remotely.
    pub async fn update_group_info(
        &self,
        gid: u64,
        name: Option<&str>,
        desc: Option<&str>,
    ) -> Result<(), Error> {
        info!("update group info of {gid}");
        let update = GroupUpdate {
            name: name.map(str::to_string),
            desc: desc.map(str::to_string),
        };
        let body = http::to_json(&update)?;
        self.transport
            .execute(Method::PUT, &format!("/groups/{gid}"), &[], Some(body))
            .await?;
        Ok(())
    }

    /// Deletes one group.
    pub async fn delete_group(&self, gid: u64) -> Result<(), Error> {
        info!("delete group {gid}");
        self.transport
            .execute(Method::DELETE, &format!("/groups/{gid}"), &[], None)
            .await?;
        Ok(())
    }
}
