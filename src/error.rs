//! Error types for the Chirp SDK.
//!
//! Every fallible operation in this crate returns [`Error`]. The variants keep
//! the two remote failure categories apart so callers can tell "retry later"
//! ([`Error::Connection`]) from "fix the request" ([`Error::Request`]), with
//! purely local construction failures ([`Error::MissingField`],
//! [`Error::Transport`]) raised before any network attempt.

use thiserror::Error;

/// Errors returned by the Chirp SDK.
///
/// # Examples
///
/// ```no_run
/// # use chirp_sdk::{ChirpClient, Error};
/// # async fn run(client: ChirpClient) {
/// match client.get_user_info("test_user").await {
///     Ok(info) => println!("nickname: {:?}", info.nickname()),
///     Err(Error::Connection { .. }) => eprintln!("connection error, retry later"),
///     Err(Error::Request { status, message }) => {
///         eprintln!("rejected by the server ({status}): {message}")
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// # }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP transport could not be constructed.
    ///
    /// Raised by the client constructors, before any request is made, when
    /// the underlying [`reqwest::Client`] rejects its configuration.
    #[error("failed to build the HTTP transport: {source}")]
    Transport {
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server was never reached or never answered.
    ///
    /// Covers DNS failures, refused connections and timeouts. The transport
    /// retries these up to its configured budget before surfacing them, so a
    /// caller seeing this variant may retry the whole call later.
    #[error("connection error: {source}")]
    Connection {
        /// Underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    ///
    /// Not retryable: the request itself must be reviewed. The message is
    /// extracted from the server's JSON error envelope when present,
    /// otherwise it is the raw response body.
    #[error("request failed with status {status}: {message}")]
    Request {
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-supplied error message.
        message: String,
    },

    /// A successful response body did not match the declared result type.
    #[error("unable to parse response body: {0}")]
    Parse(String),

    /// A payload builder was finalized without a required field.
    ///
    /// Signals a programming error on the caller side; no request was sent.
    #[error("required field `{0}` was not set")]
    MissingField(&'static str),
}

impl Error {
    /// Returns `true` when retrying the same call later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }
}
