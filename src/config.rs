//! Transaction signer configuration (i.e. TOML file parsed with serde)
//!
//! # Example TOML File
//!
//! ```toml
//! chain_id = "columbus-3"
//! account_number = 1337
//! key_file = "/path/to/oracle-feeder.key"
//!
//! [acl]
//! msg_type = ["oracle/MsgExchangeRatePrevote", "oracle/MsgExchangeRateVote"]
//! ```

use crate::{
    address::ACCOUNT_PREFIX,
    amino::TypeName,
    broadcast::BroadcastMode,
    error::{Error, ErrorKind},
};
use anomaly::fail;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Transaction signer configuration
#[derive(Clone, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct SignerConfig {
    /// Chain ID of the network transactions are signed for
    pub chain_id: String,

    /// Account number corresponding to the signing key
    pub account_number: u64,

    /// Path to a Base64-encoded secp256k1 secret key
    pub key_file: PathBuf,

    /// Bech32 prefix of account addresses
    #[serde(default = "default_account_prefix")]
    pub account_prefix: String,

    /// Mode to request when broadcasting signed transactions
    #[serde(default)]
    pub broadcast_mode: BroadcastMode,

    /// Access control list (ACL) for what transactions can be signed
    #[serde(default)]
    pub acl: TxAcl,
}

impl SignerConfig {
    /// Load a TOML configuration file
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, Error> {
        match fs::read_to_string(path.as_ref()) {
            Ok(s) => s.parse(),
            Err(e) => fail!(
                ErrorKind::Io,
                "couldn't open {}: {}",
                path.as_ref().display(),
                e
            ),
        }
    }
}

impl FromStr for SignerConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }
}

fn default_account_prefix() -> String {
    ACCOUNT_PREFIX.to_owned()
}

/// Transaction Access Control Lists
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct TxAcl {
    /// Transaction message types. An empty list allows every type.
    #[serde(default)]
    pub msg_type: Vec<TypeName>,
}

impl TxAcl {
    /// Is the given message type allowed to be signed?
    pub fn allows(&self, msg_type: &TypeName) -> bool {
        self.msg_type.is_empty() || self.msg_type.contains(msg_type)
    }
}

#[cfg(test)]
mod tests {
    use super::SignerConfig;
    use crate::{broadcast::BroadcastMode, error::ErrorKind};

    #[test]
    fn defaults() {
        let config: SignerConfig = r#"
            chain_id = "soju-0009"
            account_number = 167
            key_file = "signer.key"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.account_prefix, "terra");
        assert_eq!(config.broadcast_mode, BroadcastMode::Block);
        assert!(config.acl.msg_type.is_empty());
        assert!(config.acl.allows(&"bank/MsgSend".parse().unwrap()));
    }

    #[test]
    fn acl() {
        let config: SignerConfig = r#"
            chain_id = "columbus-3"
            account_number = 1
            key_file = "signer.key"
            broadcast_mode = "sync"

            [acl]
            msg_type = ["oracle/MsgExchangeRateVote"]
        "#
        .parse()
        .unwrap();

        assert_eq!(config.broadcast_mode, BroadcastMode::Sync);
        assert!(config.acl.allows(&"oracle/MsgExchangeRateVote".parse().unwrap()));
        assert!(!config.acl.allows(&"bank/MsgSend".parse().unwrap()));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = "chain_id = \"x\"\naccount_number = 1\nkey_file = \"k\"\nseq_file = \"s\""
            .parse::<SignerConfig>()
            .unwrap_err();

        assert_eq!(*err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn rejects_malformed_msg_types() {
        let result = "chain_id = \"x\"\naccount_number = 1\nkey_file = \"k\"\n\
                      [acl]\nmsg_type = [\"MsgSend\"]"
            .parse::<SignerConfig>();

        assert!(result.is_err());
    }
}
