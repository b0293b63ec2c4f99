//! Transaction message types (i.e. `sdk.Msg`)
//!
//! Each message kind is a variant of [`Msg`]. In Amino JSON messages are
//! serialized as `{"type": <registered name>, "value": {...}}`.
//!
//! Constructors of messages which carry coin lists sort those lists by
//! denomination, since independently built copies of the same message must
//! be byte-identical.

mod bank;
mod distribution;
mod gov;
mod market;
mod oracle;
mod staking;

pub use self::{
    bank::{Input, MsgMultiSend, MsgSend, Output},
    distribution::{MsgModifyWithdrawAddress, MsgWithdrawDelegationReward},
    gov::{MsgDeposit, MsgVote, VoteOption},
    market::MsgSwap,
    oracle::{MsgExchangeRatePrevote, MsgExchangeRateVote, MsgPricePrevote, MsgPriceVote},
    staking::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate},
};

use crate::{
    amino::{self, Encode, Registered, TypeName},
    error::Error,
};
use serde::{Deserialize, Serialize};

/// Transaction message. These serve as the payload for [`StdTx`]
/// transactions.
///
/// [`StdTx`]: crate::StdTx
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    /// `bank/MsgSend`
    #[serde(rename = "bank/MsgSend")]
    Send(MsgSend),

    /// `bank/MsgMultiSend`
    #[serde(rename = "bank/MsgMultiSend")]
    MultiSend(MsgMultiSend),

    /// `market/MsgSwap`
    #[serde(rename = "market/MsgSwap")]
    Swap(MsgSwap),

    /// `staking/MsgDelegate`
    #[serde(rename = "staking/MsgDelegate")]
    Delegate(MsgDelegate),

    /// `staking/MsgBeginRedelegate`
    #[serde(rename = "staking/MsgBeginRedelegate")]
    Redelegate(MsgBeginRedelegate),

    /// `staking/MsgUndelegate`
    #[serde(rename = "staking/MsgUndelegate")]
    Undelegate(MsgUndelegate),

    /// `distribution/MsgModifyWithdrawAddress`
    #[serde(rename = "distribution/MsgModifyWithdrawAddress")]
    SetWithdrawAddress(MsgModifyWithdrawAddress),

    /// `distribution/MsgWithdrawDelegationReward`
    #[serde(rename = "distribution/MsgWithdrawDelegationReward")]
    WithdrawDelegatorReward(MsgWithdrawDelegationReward),

    /// `gov/MsgDeposit`
    #[serde(rename = "gov/MsgDeposit")]
    Deposit(MsgDeposit),

    /// `gov/MsgVote`
    #[serde(rename = "gov/MsgVote")]
    Vote(MsgVote),

    /// `oracle/MsgPricePrevote`
    #[serde(rename = "oracle/MsgPricePrevote")]
    PricePrevote(MsgPricePrevote),

    /// `oracle/MsgPriceVote`
    #[serde(rename = "oracle/MsgPriceVote")]
    PriceVote(MsgPriceVote),

    /// `oracle/MsgExchangeRatePrevote`
    #[serde(rename = "oracle/MsgExchangeRatePrevote")]
    ExchangeRatePrevote(MsgExchangeRatePrevote),

    /// `oracle/MsgExchangeRateVote`
    #[serde(rename = "oracle/MsgExchangeRateVote")]
    ExchangeRateVote(MsgExchangeRateVote),
}

/// Dispatch to the message type wrapped by a [`Msg`]
macro_rules! with_msg {
    ($msg:expr, $inner:ident => $body:expr) => {
        match $msg {
            Msg::Send($inner) => $body,
            Msg::MultiSend($inner) => $body,
            Msg::Swap($inner) => $body,
            Msg::Delegate($inner) => $body,
            Msg::Redelegate($inner) => $body,
            Msg::Undelegate($inner) => $body,
            Msg::SetWithdrawAddress($inner) => $body,
            Msg::WithdrawDelegatorReward($inner) => $body,
            Msg::Deposit($inner) => $body,
            Msg::Vote($inner) => $body,
            Msg::PricePrevote($inner) => $body,
            Msg::PriceVote($inner) => $body,
            Msg::ExchangeRatePrevote($inner) => $body,
            Msg::ExchangeRateVote($inner) => $body,
        }
    };
}

/// Message types with a fixed registered name
pub trait MsgType: Encode {
    /// Name this message is registered under
    const TYPE_NAME: &'static str;
}

impl Msg {
    /// Name this message is registered under
    pub fn type_str(&self) -> &'static str {
        fn name_of<M: MsgType>(_: &M) -> &'static str {
            M::TYPE_NAME
        }

        with_msg!(self, msg => name_of(msg))
    }
}

impl Encode for Msg {
    fn amino_fields(&self) -> Result<Vec<amino::Field>, Error> {
        with_msg!(self, msg => msg.amino_fields())
    }
}

impl Registered for Msg {
    fn type_name(&self) -> TypeName {
        TypeName::from_static(self.type_str())
    }
}

macro_rules! impl_from_msg {
    ($($variant:ident($ty:ty)),+) => {
        $(
            impl From<$ty> for Msg {
                fn from(msg: $ty) -> Msg {
                    Msg::$variant(msg)
                }
            }
        )+
    };
}

impl_from_msg!(
    Send(MsgSend),
    MultiSend(MsgMultiSend),
    Swap(MsgSwap),
    Delegate(MsgDelegate),
    Redelegate(MsgBeginRedelegate),
    Undelegate(MsgUndelegate),
    SetWithdrawAddress(MsgModifyWithdrawAddress),
    WithdrawDelegatorReward(MsgWithdrawDelegationReward),
    Deposit(MsgDeposit),
    Vote(MsgVote),
    PricePrevote(MsgPricePrevote),
    PriceVote(MsgPriceVote),
    ExchangeRatePrevote(MsgExchangeRatePrevote),
    ExchangeRateVote(MsgExchangeRateVote)
);
