//! AWS Signature Version 2 signing.
//!
//! SigV2 uses HMAC-SHA1. The `Authorization` header has the format:
//!
//! ```text
//! AWS <AWSAccessKeyId>:<Signature>
//! ```
//!
//! Where `Signature = Base64(HMAC-SHA1(SecretKey, StringToSign))` and:
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                Content-MD5 + "\n" +
//!                Content-Type + "\n" +
//!                Date + "\n" +
//!                CanonicalizedAmzHeaders +
//!                CanonicalizedResource
//! ```
//!
//! Only recognised sub-resources take part in the canonicalized resource;
//! ordinary admin parameters such as `uid` are not signed under SigV2.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::SigningError;
use crate::signer::set_header;

type HmacSha1 = Hmac<Sha1>;

/// HTTP date format used for the `Date` header.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Query keys that are part of the canonicalized resource.
const SUB_RESOURCES: &[&str] = &[
    "acl",
    "cors",
    "delete",
    "lifecycle",
    "location",
    "logging",
    "notification",
    "partNumber",
    "policy",
    "requestPayment",
    "response-cache-control",
    "response-content-disposition",
    "response-content-encoding",
    "response-content-language",
    "response-content-type",
    "response-expires",
    "restore",
    "tagging",
    "torrent",
    "uploadId",
    "uploads",
    "versionId",
    "versioning",
    "versions",
    "website",
];

/// Sign a request with SigV2, setting the `Date` and `Authorization` headers.
///
/// # Errors
///
/// Returns a [`SigningError`] if the credentials are incomplete.
pub fn sign_v2(
    parts: &mut http::request::Parts,
    credentials: &Credentials,
    now: DateTime<Utc>,
) -> Result<(), SigningError> {
    credentials.validate()?;

    let date = now.format(HTTP_DATE_FORMAT).to_string();
    set_header(parts, http::header::DATE, &date)?;

    let string_to_sign = build_string_to_sign(parts);
    debug!(string_to_sign = ?string_to_sign, "Built SigV2 string to sign");

    let signature = compute_sigv2_signature(credentials.secret_key(), &string_to_sign);
    let authorization = format!("AWS {}:{signature}", credentials.access_key_id());
    set_header(parts, http::header::AUTHORIZATION, &authorization)?;

    debug!(access_key_id = %credentials.access_key_id(), "Signed request with SigV2");
    Ok(())
}

/// Build the SigV2 string to sign from the request parts.
fn build_string_to_sign(parts: &http::request::Parts) -> String {
    let method = parts.method.as_str();
    let content_md5 = header_value(parts, "content-md5");
    let content_type = header_value(parts, "content-type");

    // An x-amz-date header replaces the Date line.
    let date = if parts.headers.contains_key("x-amz-date") {
        String::new()
    } else {
        header_value(parts, "date")
    };

    let amz_headers = build_canonicalized_amz_headers(parts);
    let resource = build_canonicalized_resource(parts);

    format!("{method}\n{content_md5}\n{content_type}\n{date}\n{amz_headers}{resource}")
}

/// Lowercased, sorted `x-amz-*` headers, each rendered as `name:value\n`.
fn build_canonicalized_amz_headers(parts: &http::request::Parts) -> String {
    let mut amz_headers: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for (name, value) in &parts.headers {
        let name_str = name.as_str();
        if name_str.starts_with("x-amz-") {
            let val = value.to_str().unwrap_or("").trim().to_owned();
            amz_headers.entry(name_str).or_default().push(val);
        }
    }

    let mut result = String::new();
    for (name, values) in &amz_headers {
        result.push_str(name);
        result.push(':');
        result.push_str(&values.join(","));
        result.push('\n');
    }

    result
}

/// The URI path plus any sub-resource query parameters, sorted by key.
fn build_canonicalized_resource(parts: &http::request::Parts) -> String {
    let path = parts.uri.path();
    let query = parts.uri.query().unwrap_or("");

    let mut sub_params: Vec<(&str, Option<String>)> = query
        .split('&')
        .filter(|param| !param.is_empty())
        .filter_map(|param| {
            let (key, value) = param.split_once('=').map_or((param, None), |(k, v)| {
                let decoded = percent_encoding::percent_decode_str(v)
                    .decode_utf8_lossy()
                    .into_owned();
                (k, Some(decoded).filter(|d| !d.is_empty()))
            });
            SUB_RESOURCES.contains(&key).then_some((key, value))
        })
        .collect();

    if sub_params.is_empty() {
        return path.to_owned();
    }

    sub_params.sort_by(|a, b| a.0.cmp(b.0));

    let params_str: Vec<String> = sub_params
        .iter()
        .map(|(k, v)| match v {
            Some(val) => format!("{k}={val}"),
            None => (*k).to_owned(),
        })
        .collect();
    format!("{path}?{}", params_str.join("&"))
}

/// Base64(HMAC-SHA1(secret, string_to_sign)).
fn compute_sigv2_signature(secret_key: &str, string_to_sign: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret_key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(string_to_sign.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

fn header_value(parts: &http::request::Parts, name: &str) -> String {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned()
}
