//! Messages to be signed ("sign bytes")

use super::{StdFee, StdTxValue};
use crate::{
    amino::{Registered, TypeName},
    canonical::canonicalize,
    config::TxAcl,
    error::{Error, ErrorKind},
    msg::Msg,
};
use anomaly::fail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet as Set;

/// Account information a transaction is signed for
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SignMetadata {
    /// Account sequence number
    pub sequence: String,

    /// Account number
    pub account_number: String,

    /// Chain ID
    pub chain_id: String,
}

impl SignMetadata {
    /// Create new [`SignMetadata`]
    pub fn new(sequence: u64, account_number: u64, chain_id: impl Into<String>) -> Self {
        Self {
            sequence: sequence.to_string(),
            account_number: account_number.to_string(),
            chain_id: chain_id.into(),
        }
    }
}

/// Message that describes a particular transaction to be signed.
///
/// Unlike [`StdTxValue`] the messages are listed under `msgs`.
#[derive(Clone, Debug, Serialize)]
pub struct SignMsg<'a> {
    account_number: &'a str,
    chain_id: &'a str,
    fee: &'a StdFee,
    memo: &'a str,
    msgs: &'a [Msg],
    sequence: &'a str,
}

impl<'a> SignMsg<'a> {
    /// Create a new [`SignMsg`] for the given transaction
    pub fn new(tx: &'a StdTxValue, metadata: &'a SignMetadata) -> Self {
        Self {
            account_number: &metadata.account_number,
            chain_id: &metadata.chain_id,
            fee: &tx.fee,
            memo: &tx.memo,
            msgs: &tx.msg,
            sequence: &metadata.sequence,
        }
    }

    /// Borrow the messages being signed
    pub fn msgs(&self) -> &[Msg] {
        self.msgs
    }

    /// Set of message types being signed
    pub fn msg_types(&self) -> Set<TypeName> {
        self.msgs.iter().map(Registered::type_name).collect()
    }

    /// Authorize this message for signing according to the given ACL
    pub fn authorize(&self, acl: &TxAcl) -> Result<(), Error> {
        for msg_type in self.msg_types() {
            if !acl.allows(&msg_type) {
                fail!(
                    ErrorKind::Access,
                    "unauthorized request to sign `{}` message",
                    msg_type
                );
            }
        }

        Ok(())
    }

    /// Canonical JSON serialization of this message
    pub fn to_json_string(&self) -> Result<String, Error> {
        canonicalize(self)?.to_json_string()
    }

    /// Compute the bytes to be signed
    pub fn sign_bytes(&self) -> Result<Vec<u8>, Error> {
        canonicalize(self)?.to_bytes()
    }
}
