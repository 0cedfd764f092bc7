//! Client configuration for the Chirp SDK.
//!
//! This module defines [`ChirpConfig`], the set of knobs shared by every
//! resource client: API host, API version path, the protocol version used by
//! admin message sending, the connection retry budget and an optional HTTP
//! proxy.
//!
//! The defaults target the production Chirp IM endpoint; a custom host is
//! mainly useful for private-cloud deployments and tests.
//!
//! # Examples
//!
//! ```
//! use chirp_sdk::ChirpConfig;
//!
//! let config = ChirpConfig::default()
//!     .with_api_host("https://im.internal.example.com")
//!     .with_max_retry_times(5);
//!
//! assert_eq!(config.base_url(), "https://im.internal.example.com/v1");
//! ```

/// Default API host for the Chirp IM backend.
pub const DEFAULT_API_HOST: &str = "https://api.chirp.im";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "/v1";

/// Protocol version sent by the `send_*_text_by_admin` helpers.
pub const DEFAULT_SEND_VERSION: i32 = 1;

/// Default number of extra connection attempts before a connection error is
/// surfaced to the caller.
pub const DEFAULT_MAX_RETRY_TIMES: u32 = 3;

/// Shared configuration for all resource clients.
///
/// Constructed once and passed to [`ChirpClient::with_config`] or to an
/// individual resource client. All setters consume and return the
/// configuration so they can be chained.
///
/// [`ChirpClient::with_config`]: crate::ChirpClient::with_config
#[derive(Clone, Debug)]
pub struct ChirpConfig {
    /// Scheme and host of the API endpoint, without a trailing slash.
    api_host: String,
    /// Version path segment appended to the host, with a leading slash.
    api_version: String,
    /// Protocol version used by the admin text-sending helpers.
    send_version: i32,
    /// Extra connection attempts performed by the transport layer.
    max_retry_times: u32,
    /// Optional proxy applied to every request.
    proxy: Option<reqwest::Proxy>,
}

impl Default for ChirpConfig {
    fn default() -> Self {
        ChirpConfig {
            api_host: DEFAULT_API_HOST.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            send_version: DEFAULT_SEND_VERSION,
            max_retry_times: DEFAULT_MAX_RETRY_TIMES,
            proxy: None,
        }
    }
}

impl ChirpConfig {
    /// Overrides the API host, e.g. for a private-cloud deployment.
    ///
    /// A trailing slash is stripped so path concatenation stays predictable.
    pub fn with_api_host(mut self, host: &str) -> Self {
        self.api_host = host.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the API version path segment.
    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    /// Overrides the protocol version used by the admin send helpers.
    pub fn with_send_version(mut self, version: i32) -> Self {
        self.send_version = version;
        self
    }

    /// Sets how many extra connection attempts the transport performs before
    /// surfacing a connection error. `0` disables retrying entirely.
    pub fn with_max_retry_times(mut self, retries: u32) -> Self {
        self.max_retry_times = retries;
        self
    }

    /// Routes every request through the given proxy.
    pub fn with_proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Full base URL: host plus version path.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.api_host, self.api_version)
    }

    /// Protocol version used by the admin send helpers.
    pub fn send_version(&self) -> i32 {
        self.send_version
    }

    /// Connection retry budget of the transport layer.
    pub fn max_retry_times(&self) -> u32 {
        self.max_retry_times
    }

    pub(crate) fn proxy(&self) -> Option<&reqwest::Proxy> {
        self.proxy.as_ref()
    }
}
