//! Message endpoints: admin sending and history browsing.
//!
//! # Modules
//!
//! - `client` - HTTP client for the message endpoints
//! - `results` - Typed views over the message endpoint responses

mod client;
mod results;

pub use crate::message::client::MessageClient;
pub use crate::message::results::{MessageListResult, SendMessageResult};
