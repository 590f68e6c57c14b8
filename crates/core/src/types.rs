//! Identifier types and lenient deserialization helpers.
//!
//! The relational store keys every entity (national IDs, facility, court,
//! discipline and reservation codes) with a BIGINT. Form fields carry the
//! same identifiers as text, and the browser-era payloads send numbers and
//! numeric strings interchangeably, so the helpers here accept both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All natural keys in the sports schema are BIGINT.
pub type DbId = i64;

// ---------------------------------------------------------------------------
// Code
// ---------------------------------------------------------------------------

/// An entity identifier in the text representation used by form fields.
///
/// Deserializes from either a JSON string or a JSON integer and always
/// serializes as a string. The empty code means "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Code {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Code {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<DbId> for Code {
    fn from(id: DbId) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ScalarRepr::deserialize(deserializer)? {
            ScalarRepr::Int(n) => Ok(Self(n.to_string())),
            ScalarRepr::Text(s) => Ok(Self(s)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarRepr {
    Int(i64),
    Text(String),
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Text(String),
}

/// Deserialize a value that may arrive either natively or as a string.
///
/// Use with `#[serde(deserialize_with = "lenient")]`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(v) => Ok(v),
        Lenient::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Like [`lenient`] but `null`, a missing field, or a blank string yield `None`.
///
/// Use with `#[serde(default, deserialize_with = "lenient_opt")]`.
pub fn lenient_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Lenient::Value(v)) => Ok(Some(v)),
        Some(Lenient::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Lenient::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Optional free text where a blank string means "not given".
///
/// Use with `#[serde(default, deserialize_with = "blank_as_none")]`.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}
