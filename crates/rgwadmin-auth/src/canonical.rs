//! Canonical request construction for AWS Signature Version 4.
//!
//! The canonical request is the string the signature is computed over:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! Query values are encoded once, by [`encode_query_component`], when the
//! request URL is built. The canonical query string reuses those bytes as-is so
//! that what is signed is exactly what goes on the wire.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`).
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query key or value using the SigV4 encoding rules.
///
/// # Examples
///
/// ```
/// use rgwadmin_auth::canonical::encode_query_component;
///
/// assert_eq!(encode_query_component("tenant$alice"), "tenant%24alice");
/// assert_eq!(encode_query_component("users=*;buckets=read"), "users%3D%2A%3Bbuckets%3Dread");
/// ```
#[must_use]
pub fn encode_query_component(input: &str) -> String {
    utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

/// Build the full canonical request string from its components.
///
/// # Examples
///
/// ```
/// use rgwadmin_auth::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "GET",
///     "/admin/user",
///     "uid=alice&format=json",
///     &[("host", "rgw.example.com")],
///     &["host"],
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// );
/// assert!(canonical.starts_with("GET\n/admin/user\nformat=json&uid=alice\n"));
/// ```
#[must_use]
pub fn build_canonical_request(
    method: &str,
    uri: &str,
    query_string: &str,
    headers: &[(&str, &str)],
    signed_headers: &[&str],
    payload_hash: &str,
) -> String {
    let canonical_uri = build_canonical_uri(uri);
    let canonical_query = build_canonical_query_string(query_string);
    let canonical_headers = build_canonical_headers(headers, signed_headers);
    let signed_headers_str = build_signed_headers_string(signed_headers);

    format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n\n{signed_headers_str}\n{payload_hash}"
    )
}

/// Build the canonical URI by encoding each path segment individually.
///
/// Slashes are preserved and an empty path becomes `/`. Segments are decoded
/// before encoding so an already-encoded path is not encoded twice.
///
/// # Examples
///
/// ```
/// use rgwadmin_auth::canonical::build_canonical_uri;
///
/// assert_eq!(build_canonical_uri("/admin/bucket"), "/admin/bucket");
/// assert_eq!(build_canonical_uri(""), "/");
/// ```
#[must_use]
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        .map(|segment| encode_query_component(&percent_decode_str(segment).decode_utf8_lossy()))
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the canonical query string by sorting already-encoded parameters.
///
/// Parameters without a value (the admin API's `?quota`, `?key`, ...) are
/// rendered as `name=`.
///
/// # Examples
///
/// ```
/// use rgwadmin_auth::canonical::build_canonical_query_string;
///
/// assert_eq!(build_canonical_query_string(""), "");
/// assert_eq!(build_canonical_query_string("uid=bob&quota&format=json"), "format=json&quota=&uid=bob");
/// ```
#[must_use]
pub fn build_canonical_query_string(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut params: Vec<(&str, &str)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| param.split_once('=').unwrap_or((param, "")))
        .collect();

    params.sort_unstable();

    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical headers block for the signed headers.
///
/// Names are lowercased, values trimmed with inner whitespace collapsed, and
/// repeated headers joined with commas. No trailing newline is emitted.
#[must_use]
pub fn build_canonical_headers(headers: &[(&str, &str)], signed_headers: &[&str]) -> String {
    let mut header_map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let trimmed_value = collapse_whitespace(value.trim());
        header_map
            .entry(name.to_lowercase())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&trimmed_value);
            })
            .or_insert(trimmed_value);
    }

    let mut sorted_signed: Vec<&str> = signed_headers.to_vec();
    sorted_signed.sort_unstable();

    sorted_signed
        .iter()
        .filter_map(|name| header_map.get(*name).map(|value| format!("{name}:{value}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the semicolon-separated, sorted list of signed header names.
///
/// # Examples
///
/// ```
/// use rgwadmin_auth::canonical::build_signed_headers_string;
///
/// assert_eq!(
///     build_signed_headers_string(&["x-amz-date", "host", "x-amz-content-sha256"]),
///     "host;x-amz-content-sha256;x-amz-date"
/// );
/// ```
#[must_use]
pub fn build_signed_headers_string(signed_headers: &[&str]) -> String {
    let mut sorted: Vec<&str> = signed_headers.to_vec();
    sorted.sort_unstable();
    sorted.join(";")
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_admin_path_unchanged() {
        assert_eq!(build_canonical_uri("/admin/metadata/user"), "/admin/metadata/user");
    }

    #[test]
    fn test_should_encode_special_characters_in_path() {
        assert_eq!(build_canonical_uri("/admin/some path"), "/admin/some%20path");
        assert_eq!(build_canonical_uri("/admin/some%20path"), "/admin/some%20path");
    }

    #[test]
    fn test_should_render_valueless_sub_selector_with_equals() {
        assert_eq!(
            build_canonical_query_string("quota&uid=alice&quota-type=user"),
            "quota=&quota-type=user&uid=alice"
        );
    }

    #[test]
    fn test_should_preserve_encoded_values() {
        assert_eq!(
            build_canonical_query_string("uid=acme%24alice&format=json"),
            "format=json&uid=acme%24alice"
        );
    }

    #[test]
    fn test_should_encode_reserved_characters_only() {
        assert_eq!(encode_query_component("Test User"), "Test%20User");
        assert_eq!(encode_query_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_query_component("a+b/c"), "a%2Bb%2Fc");
    }

    #[test]
    fn test_should_collapse_whitespace_in_header_values() {
        let headers = [("Host", "  rgw.example.com  "), ("X-Custom", "a   b")];
        let result = build_canonical_headers(&headers, &["host", "x-custom"]);
        assert_eq!(result, "host:rgw.example.com\nx-custom:a b");
    }

    #[test]
    fn test_should_build_canonical_request_matching_aws_example() {
        use sha2::{Digest, Sha256};

        let empty_hash = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        let headers = [
            ("host", "examplebucket.s3.amazonaws.com"),
            ("range", "bytes=0-9"),
            ("x-amz-content-sha256", empty_hash),
            ("x-amz-date", "20130524T000000Z"),
        ];
        let signed = ["host", "range", "x-amz-content-sha256", "x-amz-date"];

        let canonical = build_canonical_request("GET", "/test.txt", "", &headers, &signed, empty_hash);

        let hash = hex::encode(Sha256::digest(canonical.as_bytes()));
        assert_eq!(
            hash,
            "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972"
        );
    }
}
