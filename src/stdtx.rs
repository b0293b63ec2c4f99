//! `StdTx` Amino transactions.
//!
//! # Equivalent Go code
//!
//! - [`StdTx` (godoc)](https://godoc.org/github.com/cosmos/cosmos-sdk/x/auth/types#StdTx)

pub mod builder;
pub mod sign_msg;

pub use self::{
    builder::Builder,
    sign_msg::{SignMetadata, SignMsg},
};

use crate::{
    amino::{self, encode_length_prefixed, Encode, Registered, TypeName, Value},
    coin::{sort_coins, Coin},
    error::{Error, ErrorKind},
    msg::Msg,
    serializers::u64_string,
};
use anomaly::format_err;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle_encoding::{base64, hex};
use tracing::debug;

/// Name `StdTx` is registered under
pub const STD_TX_TYPE: &str = "core/StdTx";

/// Name secp256k1 public keys are registered under
pub const PUB_KEY_TYPE: &str = "tendermint/PubKeySecp256k1";

/// Signed transaction: `{"type": "core/StdTx", "value": {...}}`
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StdTx {
    /// Registered type name
    #[serde(rename = "type")]
    pub type_name: TypeName,

    /// Transaction contents
    pub value: StdTxValue,
}

impl StdTx {
    /// Create a new unsigned transaction.
    ///
    /// Messages are kept in the given order. The fee's coins are sorted by
    /// denomination.
    pub fn new(msgs: Vec<Msg>, fee: StdFee, memo: impl Into<String>) -> Self {
        Self {
            type_name: TypeName::from_static(STD_TX_TYPE),
            value: StdTxValue {
                fee: StdFee::new(fee.gas, fee.amount),
                memo: memo.into(),
                msg: msgs,
                signatures: vec![],
            },
        }
    }

    /// Replace the signatures of this transaction with a single signature
    pub fn with_signature(self, signature: StdSignature) -> Self {
        self.with_signatures(vec![signature])
    }

    /// Replace the signatures of this transaction, keeping their order
    pub fn with_signatures(self, signatures: Vec<StdSignature>) -> Self {
        Self {
            type_name: self.type_name,
            value: self.value.with_signatures(signatures),
        }
    }

    /// Amino-encode this transaction, prefixed by its length. These are the
    /// bytes submitted to a node.
    pub fn to_tx_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut encoded = self.to_amino_bytes()?;
        let mut tx_bytes = Vec::with_capacity(encoded.len() + 2);
        encode_length_prefixed(&mut encoded, &mut tx_bytes);
        Ok(tx_bytes)
    }

    /// Encode this transaction and compute its hash: the SHA-256 digest of
    /// the transaction bytes, as lowercase hex
    pub fn encode_and_hash(&self) -> Result<(Vec<u8>, String), Error> {
        let tx_bytes = self.to_tx_bytes()?;
        let hash = tx_hash(&tx_bytes);

        debug!(
            len = tx_bytes.len(),
            msgs = self.value.msg.len(),
            "encoded transaction {}",
            hash
        );

        Ok((tx_bytes, hash))
    }
}

impl Encode for StdTx {
    fn amino_fields(&self) -> Result<Vec<amino::Field>, Error> {
        self.value.amino_fields()
    }
}

impl Registered for StdTx {
    fn type_name(&self) -> TypeName {
        self.type_name.clone()
    }
}

/// Compute the hash of the given transaction bytes as lowercase hex
pub fn tx_hash(tx_bytes: &[u8]) -> String {
    String::from_utf8(hex::encode(Sha256::digest(tx_bytes))).expect("hex should always be UTF-8")
}

/// Contents of a [`StdTx`]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StdTxValue {
    /// Fee
    pub fee: StdFee,

    /// Memo
    #[serde(default)]
    pub memo: String,

    /// Messages, in the order they're executed
    pub msg: Vec<Msg>,

    /// Signatures
    #[serde(default)]
    pub signatures: Vec<StdSignature>,
}

impl StdTxValue {
    /// Replace the signatures with a single signature
    pub fn with_signature(self, signature: StdSignature) -> Self {
        self.with_signatures(vec![signature])
    }

    /// Replace the signatures, keeping their order (e.g. when assembling a
    /// multisig transaction)
    pub fn with_signatures(self, signatures: Vec<StdSignature>) -> Self {
        Self { signatures, ..self }
    }
}

impl Encode for StdTxValue {
    fn amino_fields(&self) -> Result<Vec<amino::Field>, Error> {
        let mut fields = vec![];

        for msg in &self.msg {
            let concrete = Value::embedded(msg)?;
            fields.push((1, Value::Interface(msg.type_name(), Box::new(concrete))));
        }

        fields.push((2, Value::embedded(&self.fee)?));

        for sig in &self.signatures {
            fields.push((3, Value::embedded(sig)?));
        }

        fields.push((4, Value::String(self.memo.clone())));
        Ok(fields)
    }
}

/// Transaction fee
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StdFee {
    /// Fee to be paid
    #[serde(default)]
    pub amount: Vec<Coin>,

    /// Gas requested for the transaction
    #[serde(with = "u64_string")]
    pub gas: u64,
}

impl StdFee {
    /// Create a new fee, sorting `amount` by denomination
    pub fn new(gas: u64, amount: Vec<Coin>) -> Self {
        Self {
            amount: sort_coins(amount),
            gas,
        }
    }

    /// Fee with a single coin
    pub fn for_coin(gas: u64, coin: Coin) -> Self {
        Self::new(gas, vec![coin])
    }
}

impl Encode for StdFee {
    fn amino_fields(&self) -> Result<Vec<amino::Field>, Error> {
        let mut fields = vec![];

        for coin in &self.amount {
            fields.push((1, Value::embedded(coin)?));
        }

        fields.push((2, Value::Uint64(self.gas)));
        Ok(fields)
    }
}

/// Signature over a transaction's sign bytes, along with the public key
/// which verifies it
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StdSignature {
    /// Base64-encoded 64-byte `(r, s)` signature
    pub signature: String,

    /// Public key
    pub pub_key: PubKey,
}

impl StdSignature {
    /// Create a signature from its raw bytes and the signer's compressed
    /// secp256k1 public key
    pub fn new(signature: &[u8], public_key: &[u8]) -> Self {
        Self {
            signature: encode_base64(signature),
            pub_key: PubKey {
                type_name: TypeName::from_static(PUB_KEY_TYPE),
                value: encode_base64(public_key),
            },
        }
    }
}

impl Encode for StdSignature {
    fn amino_fields(&self) -> Result<Vec<amino::Field>, Error> {
        let public_key = decode_base64(&self.pub_key.value)?;
        let signature = decode_base64(&self.signature)?;

        Ok(vec![
            (
                1,
                Value::Interface(
                    self.pub_key.type_name.clone(),
                    Box::new(Value::Bytes(public_key)),
                ),
            ),
            (2, Value::Bytes(signature)),
        ])
    }
}

/// Public key: `{"type": <key type>, "value": <base64 key>}`
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PubKey {
    /// Registered key type
    #[serde(rename = "type")]
    pub type_name: TypeName,

    /// Base64-encoded key bytes
    pub value: String,
}

fn encode_base64(bytes: &[u8]) -> String {
    String::from_utf8(base64::encode(bytes)).expect("base64 should always be UTF-8")
}

fn decode_base64(s: &str) -> Result<Vec<u8>, Error> {
    base64::decode(s).map_err(|e| format_err!(ErrorKind::Encoding, "invalid base64: {}", e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::MsgSend;

    const FROM: &str = "terra1gn37dh0jl4zu4fp48d8y4c0hqs9cel83x7st7v";
    const TO: &str = "terra1ptdx6akgk7wwemlk5j73artt5t6j8am08ql3qv";

    fn example_tx() -> StdTx {
        let msg = MsgSend::new(FROM, TO, vec![Coin::new("1000000", "uluna")]);
        StdTx::new(
            vec![msg.into()],
            StdFee::for_coin(200_000, Coin::new("1000", "uluna")),
            "library test",
        )
    }

    fn example_sig(fill: u8) -> StdSignature {
        StdSignature::new(&[fill; 64], &[0x02; 33])
    }

    #[test]
    fn fee_coins_are_sorted() {
        let fee = StdFee::new(1, vec![Coin::new("1", "uusd"), Coin::new("1", "ukrw")]);
        assert_eq!(fee.amount[0].denom, "ukrw");
    }

    #[test]
    fn fee_without_amount() {
        let fee: StdFee = serde_json::from_str(r#"{"gas":"5000"}"#).unwrap();
        assert_eq!(fee, StdFee::new(5000, vec![]));
        assert_eq!(
            serde_json::to_string(&fee).unwrap(),
            r#"{"amount":[],"gas":"5000"}"#
        );
    }

    #[test]
    fn with_signature_replaces_signatures() {
        let tx = example_tx()
            .with_signatures(vec![example_sig(1), example_sig(2)])
            .with_signature(example_sig(3));

        assert_eq!(tx.value.signatures, vec![example_sig(3)]);
    }

    #[test]
    fn with_signatures_keeps_order() {
        let sigs = vec![example_sig(3), example_sig(1), example_sig(2)];
        let value = example_tx().value.with_signatures(sigs.clone());
        assert_eq!(value.signatures, sigs);
    }

    #[test]
    fn tx_json() {
        let json = serde_json::to_value(example_tx().with_signature(example_sig(1))).unwrap();

        assert_eq!(json["type"], "core/StdTx");
        assert_eq!(json["value"]["msg"][0]["type"], "bank/MsgSend");
        assert_eq!(json["value"]["fee"]["gas"], "200000");
        assert_eq!(
            json["value"]["signatures"][0]["pub_key"]["type"],
            "tendermint/PubKeySecp256k1"
        );
    }

    #[test]
    fn tx_bytes_are_length_prefixed() {
        let tx = example_tx().with_signature(example_sig(1));
        let (bytes, hash) = tx.encode_and_hash().unwrap();

        let mut payload = bytes.as_slice();
        let len = prost_amino::encoding::decode_varint(&mut payload).unwrap();
        assert_eq!(len as usize, payload.len());
        assert_eq!(&payload[..4], &[0xc6, 0xc1, 0x02, 0x3f]);
        assert_eq!(hash, tx_hash(&bytes));
        assert_eq!(hash.len(), 64);
        assert!(hash.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn encoding_is_stable() {
        let tx = example_tx().with_signature(example_sig(1));
        assert_eq!(tx.encode_and_hash().unwrap(), tx.encode_and_hash().unwrap());
    }

    #[test]
    fn malformed_address_is_encoding_error() {
        let msg = MsgSend::new(FROM, "terra1invalid", vec![]);
        let tx = StdTx::new(vec![msg.into()], StdFee::new(1, vec![]), "");
        let err = tx.encode_and_hash().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Encoding);
    }
}
