//! Admin request construction.
//!
//! An [`AdminRequestBuilder`] starts from an [`AdminOperation`], which fixes the
//! method, the resource path and the sub-resource selector. Caller arguments are
//! added as mandatory or optional parameters; their names are translated from
//! `snake_case` to the gateway's `kebab-case` uniformly.

use bytes::Bytes;
use rgwadmin_model::AdminOperation;
use serde::{Deserialize, Serialize};

use crate::params::{ParamValue, QueryParams};

/// Handling of explicit `false`, `0` and `""` optional values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalsyParams {
    /// Send them like any other value.
    #[default]
    Send,
    /// Treat them as absent, falling back to the registered default if any.
    Omit,
}

/// Where admin requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Use `https` when `true`.
    pub secure: bool,
    /// Gateway host name or address.
    pub host: String,
    /// Explicit port, if any.
    pub port: Option<u16>,
    /// Path prefix of the admin API, e.g. `/admin`.
    pub admin_path: String,
}

impl Endpoint {
    /// The URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// `host[:port]`, as sent in the `Host` header. IPv6 literals are
    /// bracketed.
    #[must_use]
    pub fn authority(&self) -> String {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        match self.port {
            Some(port) => format!("{host}:{port}"),
            None => host,
        }
    }
}

/// A fully-built admin request, not yet signed.
#[derive(Debug, Clone)]
pub struct AdminRequest {
    /// The operation this request performs.
    pub operation: AdminOperation,
    /// HTTP method.
    pub method: http::Method,
    /// Resource path below the admin prefix.
    pub path: &'static str,
    /// Query parameters.
    pub query: QueryParams,
    /// Extra headers.
    pub headers: http::HeaderMap,
    /// Request body; empty for every admin operation.
    pub body: Bytes,
}

impl AdminRequest {
    /// Start building a request for `operation`.
    pub fn builder(operation: AdminOperation) -> AdminRequestBuilder {
        AdminRequestBuilder::new(operation)
    }

    /// The path and query relative to the host, e.g. `/admin/user?uid=alice`.
    #[must_use]
    pub fn path_and_query(&self, admin_path: &str) -> String {
        let path = collapse_slashes(&format!("{admin_path}/{}", self.path));
        if self.query.is_empty() {
            path
        } else {
            format!("{path}?{}", self.query.to_query_string())
        }
    }

    /// Convert into an `http::Request` addressed at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an [`http::Error`] if the endpoint does not form a valid URI.
    pub fn into_http(self, endpoint: &Endpoint) -> Result<http::Request<Bytes>, http::Error> {
        let authority = endpoint.authority();
        let uri = format!(
            "{}://{authority}{}",
            endpoint.scheme(),
            self.path_and_query(&endpoint.admin_path)
        );

        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .header(http::header::HOST, authority);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        builder.body(self.body)
    }
}

/// Builder for [`AdminRequest`].
#[derive(Debug, Clone)]
pub struct AdminRequestBuilder {
    operation: AdminOperation,
    query: QueryParams,
    headers: http::HeaderMap,
    falsy: FalsyParams,
}

impl AdminRequestBuilder {
    /// Start from an operation; its sub-resource selector is added first.
    #[must_use]
    pub fn new(operation: AdminOperation) -> Self {
        let mut query = QueryParams::new();
        if let Some(sub_resource) = operation.sub_resource() {
            query.flag(sub_resource);
        }
        Self {
            operation,
            query,
            headers: http::HeaderMap::new(),
            falsy: FalsyParams::default(),
        }
    }

    /// Select how explicit falsy optional values are handled.
    #[must_use]
    pub fn falsy_params(mut self, falsy: FalsyParams) -> Self {
        self.falsy = falsy;
        self
    }

    /// Add a parameter that is always sent.
    #[must_use]
    pub fn mandatory(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.query.set(wire_key(key), value);
        self
    }

    /// Add a parameter only if the caller supplied it.
    #[must_use]
    pub fn optional<V: Into<ParamValue>>(self, key: &str, value: Option<V>) -> Self {
        self.optional_value(key, value.map(Into::into), None)
    }

    /// Add a parameter, sending `default` when the caller did not supply it.
    #[must_use]
    pub fn optional_or<V: Into<ParamValue>>(
        self,
        key: &str,
        value: Option<V>,
        default: impl Into<ParamValue>,
    ) -> Self {
        self.optional_value(key, value.map(Into::into), Some(default.into()))
    }

    /// Request a JSON response (`format=json`).
    #[must_use]
    pub fn format_json(self) -> Self {
        self.optional_or("format", None::<&str>, "json")
    }

    /// Add an extra header.
    #[must_use]
    pub fn header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    fn optional_value(
        mut self,
        key: &str,
        value: Option<ParamValue>,
        default: Option<ParamValue>,
    ) -> Self {
        let value = match (value, self.falsy) {
            (Some(v), FalsyParams::Omit) if v.is_falsy() => None,
            (v, _) => v,
        };
        if let Some(v) = value.or(default) {
            self.query.set(wire_key(key), v);
        }
        self
    }

    /// Finish the request.
    #[must_use]
    pub fn build(self) -> AdminRequest {
        AdminRequest {
            operation: self.operation,
            method: self.operation.method(),
            path: self.operation.resource(),
            query: self.query,
            headers: self.headers,
            body: Bytes::new(),
        }
    }
}

/// Translate a caller-side parameter name to its wire name.
fn wire_key(key: &str) -> String {
    key.replace('_', "-")
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        out.push('/');
    }
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if !prev_slash {
                out.push(ch);
            }
            prev_slash = true;
        } else {
            out.push(ch);
            prev_slash = false;
        }
    }
    out
}
