//! Group endpoints: creation, membership and listings.
//!
//! # Modules
//!
//! - `client` - HTTP client for the group endpoints
//! - `results` - Typed views over the group endpoint responses

mod client;
mod results;

pub use crate::group::client::GroupClient;
pub use crate::group::results::{
    CreateGroupResult, GroupInfoResult, GroupListResult, MemberListResult, MemberResult,
};
