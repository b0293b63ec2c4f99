//! Request bodies for submitting signed transactions to a node's REST API

use crate::{
    error::{Error, ErrorKind},
    stdtx::StdTxValue,
};
use anomaly::fail;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// When the node should respond to a broadcast request
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    /// Once the transaction has been included in a block
    #[default]
    Block,

    /// Once the transaction has passed `CheckTx`
    Sync,

    /// Right away
    Async,
}

impl BroadcastMode {
    /// Name of this mode in broadcast requests
    pub fn as_str(self) -> &'static str {
        match self {
            BroadcastMode::Block => "block",
            BroadcastMode::Sync => "sync",
            BroadcastMode::Async => "async",
        }
    }
}

impl Display for BroadcastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BroadcastMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "block" => BroadcastMode::Block,
            "sync" => BroadcastMode::Sync,
            "async" => BroadcastMode::Async,
            other => fail!(ErrorKind::Parse, "unknown broadcast mode: `{}`", other),
        })
    }
}

/// Body of a broadcast request: `{"tx": <signed tx>, "mode": <mode>}`
#[derive(Clone, Debug, Serialize)]
pub struct BroadcastBody<'a> {
    /// Signed transaction
    pub tx: &'a StdTxValue,

    /// Broadcast mode
    pub mode: BroadcastMode,
}

impl<'a> BroadcastBody<'a> {
    /// Create a new broadcast body
    pub fn new(tx: &'a StdTxValue, mode: BroadcastMode) -> Self {
        Self { tx, mode }
    }

    /// Serialize this body as JSON
    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| ErrorKind::Encoding.context(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::{BroadcastBody, BroadcastMode};
    use crate::{
        coin::Coin,
        msg::MsgSend,
        stdtx::{StdFee, StdTx},
    };

    fn example_tx() -> StdTx {
        let msg = MsgSend::new(
            "terra1gn37dh0jl4zu4fp48d8y4c0hqs9cel83x7st7v",
            "terra1ptdx6akgk7wwemlk5j73artt5t6j8am08ql3qv",
            vec![Coin::new("1", "uluna")],
        );

        StdTx::new(vec![msg.into()], StdFee::new(50_000, vec![]), "")
    }

    #[test]
    fn default_mode_is_block() {
        assert_eq!(BroadcastMode::default(), BroadcastMode::Block);
    }

    #[test]
    fn parse_modes() {
        for mode in [BroadcastMode::Block, BroadcastMode::Sync, BroadcastMode::Async] {
            assert_eq!(mode.as_str().parse::<BroadcastMode>().unwrap(), mode);
        }

        assert!("commit".parse::<BroadcastMode>().is_err());
    }

    #[test]
    fn body_json() {
        let tx = example_tx();
        let body = BroadcastBody::new(&tx.value, BroadcastMode::Sync)
            .to_json_string()
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["mode"], "sync");
        assert_eq!(json["tx"], serde_json::to_value(&tx.value).unwrap());
    }
}
