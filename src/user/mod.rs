//! User endpoints: accounts, admins, blacklists, friends and no-disturb.
//!
//! # Modules
//!
//! - `client` - HTTP client for the user endpoints
//! - `results` - Typed views over the user endpoint responses
//!
//! # Examples
//!
//! ```no_run
//! use chirp_sdk::ChirpConfig;
//! use chirp_sdk::user::UserClient;
//!
//! # async fn run() -> Result<(), chirp_sdk::Error> {
//! let client = UserClient::new("appkey", "secret", &ChirpConfig::default())?;
//! let state = client.get_user_state("test_user").await?;
//! println!("online: {}", state.online());
//! # Ok(())
//! # }
//! ```

mod client;
mod results;

pub use crate::user::client::UserClient;
pub use crate::user::results::{UserGroupsResult, UserInfoResult, UserListResult, UserStateResult};
