//! Amino field values

use super::{encode_fields, encode_length_prefixed, Encode, Field, TypeName};
use crate::{
    address::Address,
    decimal::Dec,
    error::{Error, ErrorKind},
};
use anomaly::{fail, format_err};

/// Amino values - data contained in fields of a message
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Byte strings (e.g. `sdk.AccAddress`, signatures)
    Bytes(Vec<u8>),

    /// Strings (including `sdk.Int` and `sdk.Dec`, which Amino encodes as
    /// decimal strings)
    String(String),

    /// Unsigned integers, encoded as varints
    Uint64(u64),

    /// Embedded structs
    Struct(Vec<Field>),

    /// Concrete value of an interface type, prefixed by its registered name
    Interface(TypeName, Box<Value>),
}

impl Value {
    /// Embed a struct as a field value
    pub fn embedded(value: &impl Encode) -> Result<Self, Error> {
        Ok(Value::Struct(value.amino_fields()?))
    }

    /// `sdk.AccAddress` / `sdk.ValAddress` given in Bech32 form
    pub fn address(bech32: &str) -> Result<Self, Error> {
        let (_, addr) = Address::from_bech32(bech32)
            .map_err(|e| format_err!(ErrorKind::Encoding, "{}", e))?;

        Ok(Value::Bytes(addr.as_ref().to_vec()))
    }

    /// `sdk.Int`: arbitrary-precision integers in base 10
    pub fn sdk_int(int: &str) -> Result<Self, Error> {
        if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
            fail!(ErrorKind::Encoding, "invalid sdk.Int: `{}`", int);
        }

        Ok(Value::String(int.to_owned()))
    }

    /// `sdk.Dec`: scaled by 10^18 and encoded as an integer string
    pub fn sdk_dec(dec: &Dec) -> Self {
        Value::String(dec.to_amino_string())
    }

    /// Is this the default value for its type? Default values are omitted
    /// from the encoding. Structs and interfaces are always written.
    pub(super) fn is_default(&self) -> bool {
        match self {
            Value::Bytes(bytes) => bytes.is_empty(),
            Value::String(s) => s.is_empty(),
            Value::Uint64(n) => *n == 0,
            Value::Struct(_) | Value::Interface(..) => false,
        }
    }

    /// Get the Amino/Proto wire type for this field
    /// See: <https://developers.google.com/protocol-buffers/docs/encoding#structure>
    pub(super) fn wire_type(&self) -> u64 {
        match self {
            Value::Uint64(_) => 0,
            // Length-delimited types
            Value::Bytes(_) | Value::String(_) | Value::Struct(_) | Value::Interface(..) => 2,
        }
    }

    /// Encode the body of this value, which is length-prefixed when used as
    /// a length-delimited field
    pub(super) fn encode_payload(&self) -> Result<Vec<u8>, Error> {
        let mut result = vec![];

        match self {
            Value::Bytes(bytes) => result.extend_from_slice(bytes),
            Value::String(s) => result.extend_from_slice(s.as_bytes()),
            Value::Uint64(_) => {
                fail!(ErrorKind::Encoding, "uint64 has no length-delimited form")
            }
            Value::Struct(fields) => encode_fields(fields, &mut result)?,
            Value::Interface(type_name, concrete) => {
                result.extend_from_slice(&type_name.amino_prefix());

                match concrete.as_ref() {
                    Value::Struct(fields) => encode_fields(fields, &mut result)?,
                    // Registered non-struct types (e.g. public keys) carry
                    // their own length prefix after the type prefix
                    other => {
                        encode_length_prefixed(&mut other.encode_payload()?, &mut result)
                    }
                }
            }
        }

        Ok(result)
    }
}
