//! HTTP layer of the RADOS Gateway admin client.
//!
//! - [`params`] and [`request`] turn an [`AdminOperation`] plus caller
//!   arguments into an [`AdminRequest`], and the request into a signable
//!   `http::Request` against an [`Endpoint`].
//! - [`registry`] and [`response`] classify gateway responses into typed
//!   results or [`AdminError`]s.
//! - [`transport`] is the seam to the network, with a reqwest-backed default.
//!
//! [`AdminOperation`]: rgwadmin_model::AdminOperation
//! [`AdminError`]: rgwadmin_model::AdminError

pub mod params;
pub mod registry;
pub mod request;
pub mod response;
pub mod transport;

pub use params::{ParamValue, QueryParams};
pub use registry::ErrorRegistry;
pub use request::{AdminRequest, AdminRequestBuilder, Endpoint, FalsyParams};
pub use response::{DecodeError, decode_json, interpret};
pub use transport::{RawResponse, RequestOptions, ReqwestTransport, Transport, TransportError};
