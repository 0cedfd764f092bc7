//! Chirp SDK - A server-side Rust SDK for the Chirp IM REST API.
//!
//! This crate mirrors the REST endpoints of the Chirp IM backend with one
//! method per remote operation: user registration, group management, admin
//! messaging, friend lists, blacklists and no-disturb settings.
//!
//! # Overview
//!
//! Every call follows the same shape: build a payload, serialize it, issue
//! one authenticated HTTP round trip, map the response into a typed result
//! or a typed error. The SDK keeps no local state between calls - no cache,
//! no queue, no background work.
//!
//! # Features
//!
//! - **Single Entry Point**: [`ChirpClient`] flattens every operation behind
//!   one long-lived object
//! - **Fluent Payload Builders**: required fields are checked at build time,
//!   before any network call
//! - **Partial Updates**: fields never set on an update payload are absent
//!   from the request, which the backend reads as "leave unchanged"
//! - **Two Remote Error Kinds**: connection errors are retryable, request
//!   errors carry the server's status and message and are not
//! - **Configurable Endpoint**: private-cloud hostname, proxy and connection
//!   retry budget via [`ChirpConfig`]
//!
//! # Usage
//!
//! ```no_run
//! use chirp_sdk::ChirpClient;
//! use chirp_sdk::payload::{MessageBody, RegisterInfo};
//!
//! # async fn run() -> Result<(), chirp_sdk::Error> {
//! let client = ChirpClient::new("242780bfdd7315dc1989fe2b", "2f5ced2bef64167950e63d13")?;
//!
//! let user = RegisterInfo::builder()
//!     .username("test_user")
//!     .password("test_pass")
//!     .build()?;
//! client.register_users(&[user]).await?;
//!
//! let info = client.get_user_info("test_user").await?;
//! println!("registered: {}", info.username());
//!
//! client
//!     .send_single_text_by_admin("test_user", "admin_user", MessageBody::text("welcome"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Calls either fully succeed with one parsed result or fully fail with one
//! [`Error`]. [`Error::Connection`] means the server was never reached and
//! the call may be retried; [`Error::Request`] means the server rejected
//! the request and retrying the same call will not help. Builder misuse
//! surfaces as [`Error::MissingField`] before any network attempt.
//!
//! # Architecture
//!
//! The crate consists of several modules:
//!
//! - [`client`] - Facade client composing the three resource clients
//! - [`config`] - Endpoint, proxy and retry configuration
//! - [`error`] - The error type shared by every operation
//! - [`payload`] - Fluent builders for request bodies
//! - [`user`] - User, admin, blacklist and friend endpoints
//! - [`group`] - Group management endpoints
//! - [`message`] - Message sending and history endpoints
//!
//! Logging goes through the [`log`] facade; the library installs no
//! subscriber and emits request/response lines at `debug` level.

pub mod client;
pub mod config;
pub mod error;
pub mod group;
mod http;
pub mod message;
pub mod payload;
pub mod user;

pub use crate::client::ChirpClient;
pub use crate::config::ChirpConfig;
pub use crate::error::Error;
