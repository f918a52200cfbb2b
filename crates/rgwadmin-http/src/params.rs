//! Query parameter values and the ordered query map.

use std::fmt;

use rgwadmin_auth::encode_query_component;
use rgwadmin_model::{KeyType, QuotaScope, SubUserAccess};

/// A query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A string value.
    Str(String),
    /// A boolean, rendered `true`/`false`.
    Bool(bool),
    /// An integer.
    Int(i64),
}

impl ParamValue {
    /// Returns `true` for `""`, `false` and `0`.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<KeyType> for ParamValue {
    fn from(value: KeyType) -> Self {
        Self::Str(value.as_str().to_owned())
    }
}

impl From<QuotaScope> for ParamValue {
    fn from(value: QuotaScope) -> Self {
        Self::Str(value.as_str().to_owned())
    }
}

impl From<SubUserAccess> for ParamValue {
    fn from(value: SubUserAccess) -> Self {
        Self::Str(value.as_str().to_owned())
    }
}

/// Query parameters in insertion order with unique keys.
///
/// Setting an existing key replaces its value in place. Value-less
/// sub-resource selectors (`?quota`) are stored as flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`; the last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.put(key.into(), Some(value.into()));
    }

    /// Set a value-less flag.
    pub fn flag(&mut self, key: impl Into<String>) {
        self.put(key.into(), None);
    }

    fn put(&mut self, key: String, value: Option<ParamValue>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The value of `key`, if set with a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Returns `true` if `key` is present, as a value or a flag.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys and optional values in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Render the percent-encoded query string, without a leading `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgwadmin_http::QueryParams;
    ///
    /// let mut query = QueryParams::new();
    /// query.flag("quota");
    /// query.set("uid", "acme$alice");
    /// query.set("enabled", true);
    /// assert_eq!(query.to_query_string(), "quota&uid=acme%24alice&enabled=true");
    /// ```
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| match v {
                Some(value) => format!(
                    "{}={}",
                    encode_query_component(k),
                    encode_query_component(&value.to_string())
                ),
                None => encode_query_component(k),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
