//! Canonical JSON used to compute Amino "sign bytes".
//!
//! Transactions contain Amino JSON objects of the form `{type, value}`, and
//! every implementation which signs or verifies them has to agree on the exact
//! bytes being hashed. The canonical form of a payload tree:
//!
//! - sorts the keys of every object by their byte-wise ordering
//! - drops object entries whose value is `null`
//! - leaves arrays in their original order
//! - serializes without insignificant whitespace

use crate::error::{Error, ErrorKind};
use anomaly::fail;
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize, Serializer,
};
use std::{collections::BTreeMap as Map, convert::TryFrom};

/// Canonicalize any serializable payload
pub fn canonicalize<T: Serialize + ?Sized>(payload: &T) -> Result<Value, Error> {
    let json = serde_json::to_value(payload).map_err(|e| ErrorKind::Type.context(e))?;
    Value::try_from(json)
}

/// Canonicalized payload tree.
///
/// There's no `null` variant: nulls inside objects are dropped during
/// conversion and nulls anywhere else are rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Booleans
    Bool(bool),

    /// Numbers (passed through unchanged)
    Number(serde_json::Number),

    /// Strings
    String(String),

    /// Arrays, in their original order
    Seq(Vec<Value>),

    /// Objects, ordered by key
    Map(Map<String, Value>),
}

impl Value {
    /// Serialize this value as compact JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|e| ErrorKind::Encoding.context(e).into())
    }

    /// Serialize this value as a compact JSON string
    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| ErrorKind::Encoding.context(e).into())
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self, Error> {
        Ok(match json {
            serde_json::Value::Null => fail!(
                ErrorKind::Type,
                "null is only permitted as an object value"
            ),
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(seq) => Value::Seq(
                seq.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_, Error>>()?,
            ),
        })
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Seq(seq) => {
                let mut s = serializer.serialize_seq(Some(seq.len()))?;
                for elem in seq {
                    s.serialize_element(elem)?;
                }
                s.end()
            }
            Value::Map(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
        }
    }
}
