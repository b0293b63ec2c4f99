//! Names under which concrete types are registered with Amino

use crate::error::{Error, ErrorKind};
use anomaly::fail;
use serde::{de, Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Name of a registered Amino type, e.g. `bank/MsgSend`
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TypeName(String);

impl TypeName {
    /// Create a [`TypeName`] from a name known to be well-formed
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(name.parse::<TypeName>().is_ok(), "malformed type name");
        TypeName(name.to_owned())
    }

    /// Borrow this [`TypeName`] as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compute the 4-byte Amino prefix for this type name.
    ///
    /// Hash the name with SHA-256, drop leading zero bytes and the 3
    /// "disambiguation" bytes, drop any zero bytes after those, and take the
    /// next 4 bytes.
    pub fn amino_prefix(&self) -> [u8; 4] {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut bytes = digest
            .iter()
            .copied()
            .skip_while(|&b| b == 0)
            .skip(3)
            .skip_while(|&b| b == 0);

        let mut prefix = [0u8; 4];
        for byte in prefix.iter_mut() {
            // A SHA-256 digest is never short enough to exhaust this iterator
            *byte = bytes.next().unwrap_or_default();
        }

        prefix
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let valid = s.split_once('/').map_or(false, |(module, name)| {
            !module.is_empty() && !name.is_empty() && !name.contains('/')
        });

        if !valid || !s.is_ascii() {
            fail!(
                ErrorKind::Parse,
                "type name must be of the form `module/Name`: `{}`",
                s
            );
        }

        Ok(TypeName(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl Serialize for TypeName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
