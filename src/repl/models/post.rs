//! # Post Model
//!
//! Blog records exactly as the server hands them out. These values are never
//! decorated with UI state; see [`PostStore`](super::PostStore) for the
//! client-side overlay.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Opaque post identifier assigned by the server
///
/// The server may send ids as JSON numbers or strings. Either way the id is
/// kept in its textual form and written back verbatim into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for PostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Numeric ids go back out as numbers so the record round-trips unchanged
        match self.0.parse::<u64>() {
            Ok(number) => serializer.serialize_u64(number),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PostIdVisitor;

        impl Visitor<'_> for PostIdVisitor {
            type Value = PostId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a post id as a string or an integer")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<PostId, E> {
                Ok(PostId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<PostId, E> {
                Ok(PostId(value.to_string()))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PostId, E> {
                Ok(PostId(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<PostId, E> {
                Ok(PostId(value))
            }
        }

        deserializer.deserialize_any(PostIdVisitor)
    }
}

/// A persisted blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub entry: String,
}

impl Post {
    pub fn new<I: Into<PostId>, S: Into<String>>(id: I, entry: S) -> Self {
        Self {
            id: id.into(),
            entry: entry.into(),
        }
    }
}

/// Request body for create and update calls
#[derive(Debug, Serialize)]
pub struct EntryPayload<'a> {
    pub entry: &'a str,
}
