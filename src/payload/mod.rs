//! Request payload builders for the Chirp IM API.
//!
//! Every write operation of the API takes a JSON body. The types in this
//! module are immutable value objects assembled through fluent builders:
//! optional fields that were never set are absent from the serialized form
//! (the backend reads an absent field as "leave unchanged"), and builders
//! with required fields fail at `build()` time, before any network call.
//!
//! # Modules
//!
//! - `user` - Registration, profile update, friend note and no-disturb payloads
//! - `group` - Group creation and membership payloads
//! - `message` - Admin message payloads
//!
//! # Examples
//!
//! ```
//! use chirp_sdk::payload::RegisterInfo;
//!
//! let user = RegisterInfo::builder()
//!     .username("test_user")
//!     .password("test_pass")
//!     .build()
//!     .unwrap();
//! assert_eq!(user.username(), "test_user");
//! ```

pub(crate) mod group;
mod message;
mod user;

pub use crate::payload::group::{GroupPayload, GroupPayloadBuilder, Members};
pub use crate::payload::message::{MessageBody, MessagePayload, MessagePayloadBuilder};
pub use crate::payload::user::{
    FriendNoteUpdate, NoDisturbPayload, NoDisturbPayloadBuilder, RegisterInfo,
    RegisterInfoBuilder, UserPayload, UserPayloadBuilder,
};
