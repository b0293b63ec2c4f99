//! `market` module messages

use super::MsgType;
use crate::{
    amino::{Encode, Field, Value},
    coin::Coin,
    error::Error,
};
use serde::{Deserialize, Serialize};

/// Swap an offered coin for another denomination at the market rate
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgSwap {
    /// Trader address
    pub trader: String,

    /// Coin being offered
    pub offer_coin: Coin,

    /// Denomination asked for in exchange
    pub ask_denom: String,
}

impl MsgSwap {
    /// Create a new [`MsgSwap`]
    pub fn new(trader: impl Into<String>, offer_coin: Coin, ask_denom: impl Into<String>) -> Self {
        Self {
            trader: trader.into(),
            offer_coin,
            ask_denom: ask_denom.into(),
        }
    }
}

impl MsgType for MsgSwap {
    const TYPE_NAME: &'static str = "market/MsgSwap";
}

impl Encode for MsgSwap {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        Ok(vec![
            (1, Value::address(&self.trader)?),
            (2, Value::embedded(&self.offer_coin)?),
            (3, Value::String(self.ask_denom.clone())),
        ])
    }
}
