//! Identifiers used to match entities across two versions of a collection.
//!
//! An [`Identifier`] is one of three kinds: an integer, a UUID, or an
//! opaque string. Entities are only ever paired by identifier, never by
//! geometry.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// A caller-supplied entity identifier.
///
/// Ordering is total: integers sort before UUIDs, UUIDs before strings, and
/// values of the same kind use their natural order. Collections with mixed
/// identifier kinds therefore still sort deterministically.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Integer(i64),
    Uuid(Uuid),
    String(String),
}

impl Identifier {
    /// Parses text, trying an integer first, then a UUID, then falling back
    /// to an opaque string.
    pub fn parse(text: &str) -> Self {
        if let Ok(value) = text.parse::<i64>() {
            return Identifier::Integer(value);
        }
        match Uuid::parse_str(text) {
            Ok(uuid) => Identifier::Uuid(uuid),
            Err(_) => Identifier::String(text.to_string()),
        }
    }

    /// Returns the integer value, if this is an integer identifier.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Identifier::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the UUID value, if this is a UUID identifier.
    #[inline]
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Identifier::Uuid(uuid) => Some(uuid),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string identifier.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Identifier::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Integer(value) => write!(f, "Integer({})", value),
            Identifier::Uuid(uuid) => write!(f, "Uuid({})", uuid),
            Identifier::String(value) => write!(f, "String({:?})", value),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Integer(value) => write!(f, "{}", value),
            Identifier::Uuid(uuid) => write!(f, "{}", uuid.hyphenated()),
            Identifier::String(value) => write!(f, "{}", value),
        }
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Identifier::Integer(i64::from(value))
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Integer(i64::from(value))
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Integer(value)
    }
}

impl From<Uuid> for Identifier {
    fn from(uuid: Uuid) -> Self {
        Identifier::Uuid(uuid)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::String(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::String(value)
    }
}

// Integers are written as JSON numbers, UUIDs and strings as JSON strings.
impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Identifier::Integer(value) => serializer.serialize_i64(*value),
            Identifier::Uuid(uuid) => {
                let mut buf = Uuid::encode_buffer();
                serializer.serialize_str(uuid.hyphenated().encode_lower(&mut buf))
            }
            Identifier::String(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdentifierVisitor)
    }
}

struct IdentifierVisitor;

impl<'de> Visitor<'de> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a UUID string, or a string identifier")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Identifier, E> {
        Ok(Identifier::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Identifier, E> {
        i64::try_from(value)
            .map(Identifier::Integer)
            .map_err(|_| E::custom(format!("ill-typed identifier: {} overflows i64", value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Identifier, E> {
        Err(E::invalid_type(de::Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Identifier, E> {
        Ok(match Uuid::parse_str(value) {
            Ok(uuid) => Identifier::Uuid(uuid),
            Err(_) => Identifier::String(value.to_string()),
        })
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Identifier, E> {
        Ok(match Uuid::parse_str(&value) {
            Ok(uuid) => Identifier::Uuid(uuid),
            Err(_) => Identifier::String(value),
        })
    }
}
