//! `bank` module messages

use super::MsgType;
use crate::{
    amino::{Encode, Field, Value},
    coin::{sort_coins, Coin},
    error::Error,
};
use serde::{Deserialize, Serialize};

/// Send coins from one account to another
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgSend {
    /// Sender address
    pub from_address: String,

    /// Recipient address
    pub to_address: String,

    /// Coins to send, sorted by denomination
    pub amount: Vec<Coin>,
}

impl MsgSend {
    /// Create a new [`MsgSend`], sorting `amount` by denomination
    pub fn new(
        from_address: impl Into<String>,
        to_address: impl Into<String>,
        amount: Vec<Coin>,
    ) -> Self {
        Self {
            from_address: from_address.into(),
            to_address: to_address.into(),
            amount: sort_coins(amount),
        }
    }
}

impl MsgType for MsgSend {
    const TYPE_NAME: &'static str = "bank/MsgSend";
}

impl Encode for MsgSend {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        let mut fields = vec![
            (1, Value::address(&self.from_address)?),
            (2, Value::address(&self.to_address)?),
        ];

        for coin in &self.amount {
            fields.push((3, Value::embedded(coin)?));
        }

        Ok(fields)
    }
}

/// Input of a [`MsgMultiSend`]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Input {
    /// Account address
    pub address: String,

    /// Coins, sorted by denomination
    pub coins: Vec<Coin>,
}

/// Outputs have the same shape as inputs
pub type Output = Input;

impl Input {
    /// Create a new [`Input`] (or [`Output`]), sorting `coins` by
    /// denomination
    pub fn new(address: impl Into<String>, coins: Vec<Coin>) -> Self {
        Self {
            address: address.into(),
            coins: sort_coins(coins),
        }
    }
}

impl Encode for Input {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        let mut fields = vec![(1, Value::address(&self.address)?)];

        for coin in &self.coins {
            fields.push((2, Value::embedded(coin)?));
        }

        Ok(fields)
    }
}

/// Send coins from a set of inputs to a set of outputs
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgMultiSend {
    /// Inputs, in caller order
    pub inputs: Vec<Input>,

    /// Outputs, in caller order
    pub outputs: Vec<Output>,
}

impl MsgMultiSend {
    /// Create a new [`MsgMultiSend`].
    ///
    /// The order of inputs and outputs is kept, but each of their coin lists
    /// is sorted by denomination.
    pub fn new(inputs: Vec<Input>, outputs: Vec<Output>) -> Self {
        let sorted = |entries: Vec<Input>| {
            entries
                .into_iter()
                .map(|entry| Input::new(entry.address, entry.coins))
                .collect()
        };

        Self {
            inputs: sorted(inputs),
            outputs: sorted(outputs),
        }
    }
}

impl MsgType for MsgMultiSend {
    const TYPE_NAME: &'static str = "bank/MsgMultiSend";
}

impl Encode for MsgMultiSend {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        let mut fields = vec![];

        for input in &self.inputs {
            fields.push((1, Value::embedded(input)?));
        }

        for output in &self.outputs {
            fields.push((2, Value::embedded(output)?));
        }

        Ok(fields)
    }
}
