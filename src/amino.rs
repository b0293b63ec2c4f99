//! Amino binary encoding.
//!
//! Amino is a Protobuf-like encoding: every field is prefixed by a key made of
//! its tag and wire type. Values of interface types (e.g. `sdk.Msg`) are
//! prefixed by 4 bytes derived from the name under which their concrete type
//! was registered.
//!
//! # Equivalent Go code
//!
//! - [go-amino](https://github.com/tendermint/go-amino)

mod type_name;
mod value;

pub use self::{type_name::TypeName, value::Value};

use crate::error::Error;
use prost_amino::encoding::encode_varint;

/// Tags are indexes which identify message fields
pub type Tag = u64;

/// Fields in a message
pub type Field = (Tag, Value);

/// Types which serialize as an Amino struct
pub trait Encode {
    /// Get the tagged fields of this value, in tag order.
    ///
    /// Fails if a field can't be represented in Amino (e.g. a malformed
    /// address or integer).
    fn amino_fields(&self) -> Result<Vec<Field>, Error>;
}

/// Types registered with an Amino codec under a particular name
pub trait Registered: Encode {
    /// Name this type was registered under
    fn type_name(&self) -> TypeName;

    /// Encode this value as an interface: the type prefix followed by its
    /// fields
    fn to_amino_bytes(&self) -> Result<Vec<u8>, Error> {
        Value::Interface(self.type_name(), Box::new(Value::Struct(self.amino_fields()?)))
            .encode_payload()
    }
}

/// Encode a list of fields, omitting fields which hold default values
pub fn encode_fields(fields: &[Field], buf: &mut Vec<u8>) -> Result<(), Error> {
    for (tag, value) in fields {
        if value.is_default() {
            continue;
        }

        // Field key encodes the tag and wire type code
        encode_varint(tag << 3 | value.wire_type(), buf);

        match value {
            Value::Uint64(n) => encode_varint(*n, buf),
            _ => {
                let mut encoded_value = value.encode_payload()?;
                encode_length_prefixed(&mut encoded_value, buf);
            }
        }
    }

    Ok(())
}

/// Append `bytes` to `buf`, prefixed by their length as a varint
pub fn encode_length_prefixed(bytes: &mut Vec<u8>, buf: &mut Vec<u8>) {
    encode_varint(bytes.len() as u64, buf);
    buf.append(bytes);
}

#[cfg(test)]
mod tests {
    use super::{encode_fields, Value};

    #[test]
    fn encodes_keys_and_lengths() {
        let fields = vec![
            (1, Value::String("uluna".to_owned())),
            (2, Value::Uint64(300)),
        ];

        let mut buf = vec![];
        encode_fields(&fields, &mut buf).unwrap();

        assert_eq!(
            buf,
            [0x0a, 0x05, b'u', b'l', b'u', b'n', b'a', 0x10, 0xac, 0x02]
        );
    }

    #[test]
    fn omits_default_values() {
        let fields = vec![
            (1, Value::String(String::new())),
            (2, Value::Uint64(0)),
            (3, Value::Bytes(vec![])),
            (4, Value::Struct(vec![])),
        ];

        let mut buf = vec![];
        encode_fields(&fields, &mut buf).unwrap();

        // Embedded structs are always written
        assert_eq!(buf, [0x22, 0x00]);
    }
}
