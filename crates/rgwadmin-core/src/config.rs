//! Client configuration.
//!
//! Provides [`AdminConfig`], the explicit replacement for process-wide
//! defaults such as the admin path. Values can be built in code or loaded from
//! environment variables.

use std::time::Duration;

use rgwadmin_http::{Endpoint, FalsyParams, RequestOptions};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default admin path prefix of the gateway.
pub const DEFAULT_ADMIN_PATH: &str = "/admin";

/// Admin client configuration.
///
/// # Examples
///
/// ```
/// use rgwadmin_core::config::AdminConfig;
///
/// let config = AdminConfig::builder()
///     .host("rgw.example.com".into())
///     .port(Some(8080))
///     .secure(false)
///     .build();
/// assert_eq!(config.admin_path, "/admin");
/// assert_eq!(config.endpoint().authority(), "rgw.example.com:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    /// Gateway host name or address.
    #[builder(default = String::from("localhost"))]
    pub host: String,

    /// Explicit gateway port.
    #[builder(default)]
    pub port: Option<u16>,

    /// Whether to use HTTPS.
    #[builder(default = true)]
    pub secure: bool,

    /// Path prefix of the admin API.
    #[builder(default = String::from(DEFAULT_ADMIN_PATH))]
    pub admin_path: String,

    /// Per-request timeout in seconds.
    #[builder(default)]
    pub timeout_secs: Option<u64>,

    /// Extra attempts on connect or timeout failures.
    #[builder(default)]
    pub retries: Option<u32>,

    /// Handling of explicit falsy optional parameters.
    #[builder(default)]
    pub falsy_params: FalsyParams,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: None,
            secure: true,
            admin_path: String::from(DEFAULT_ADMIN_PATH),
            timeout_secs: None,
            retries: None,
            falsy_params: FalsyParams::Send,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `RGW_HOST` | `localhost` |
    /// | `RGW_PORT` | none |
    /// | `RGW_SECURE` | `true` |
    /// | `RGW_ADMIN_PATH` | `/admin` |
    /// | `RGW_TIMEOUT_SECS` | none |
    /// | `RGW_RETRIES` | none |
    /// | `RGW_OMIT_FALSY_PARAMS` | `false` |
    ///
    /// Unparseable numbers are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("RGW_HOST") {
            config.host = v;
        }
        if let Ok(v) = std::env::var("RGW_PORT") {
            if let Ok(n) = v.parse::<u16>() {
                config.port = Some(n);
            }
        }
        if let Ok(v) = std::env::var("RGW_SECURE") {
            config.secure = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("RGW_ADMIN_PATH") {
            config.admin_path = v;
        }
        if let Ok(v) = std::env::var("RGW_TIMEOUT_SECS") {
            if let Ok(n) = v.parse::<u64>() {
                config.timeout_secs = Some(n);
            }
        }
        if let Ok(v) = std::env::var("RGW_RETRIES") {
            if let Ok(n) = v.parse::<u32>() {
                config.retries = Some(n);
            }
        }
        if let Ok(v) = std::env::var("RGW_OMIT_FALSY_PARAMS") {
            if parse_bool(&v) {
                config.falsy_params = FalsyParams::Omit;
            }
        }

        config
    }

    /// The endpoint requests are addressed to.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            secure: self.secure,
            host: self.host.clone(),
            port: self.port,
            admin_path: self.admin_path.clone(),
        }
    }

    /// The per-request transport overrides.
    #[must_use]
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            timeout: self.timeout_secs.map(Duration::from_secs),
            retries: self.retries,
        }
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
