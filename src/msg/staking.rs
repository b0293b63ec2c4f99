//! `staking` module messages

use super::MsgType;
use crate::{
    amino::{Encode, Field, Value},
    coin::Coin,
    error::Error,
};
use serde::{Deserialize, Serialize};

/// Delegate coins to a validator
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgDelegate {
    /// Delegator address
    pub delegator_address: String,

    /// Validator operator address
    pub validator_address: String,

    /// Amount to delegate
    pub amount: Coin,
}

impl MsgDelegate {
    /// Create a new [`MsgDelegate`]
    pub fn new(
        delegator_address: impl Into<String>,
        validator_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
            amount,
        }
    }
}

impl MsgType for MsgDelegate {
    const TYPE_NAME: &'static str = "staking/MsgDelegate";
}

impl Encode for MsgDelegate {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        Ok(vec![
            (1, Value::address(&self.delegator_address)?),
            (2, Value::address(&self.validator_address)?),
            (3, Value::embedded(&self.amount)?),
        ])
    }
}

/// Move a delegation from one validator to another
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgBeginRedelegate {
    /// Delegator address
    pub delegator_address: String,

    /// Validator the delegation is moved away from
    pub validator_src_address: String,

    /// Validator the delegation is moved to
    pub validator_dst_address: String,

    /// Amount to redelegate
    pub amount: Coin,
}

impl MsgBeginRedelegate {
    /// Create a new [`MsgBeginRedelegate`]
    pub fn new(
        delegator_address: impl Into<String>,
        validator_src_address: impl Into<String>,
        validator_dst_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_src_address: validator_src_address.into(),
            validator_dst_address: validator_dst_address.into(),
            amount,
        }
    }
}

impl MsgType for MsgBeginRedelegate {
    const TYPE_NAME: &'static str = "staking/MsgBeginRedelegate";
}

impl Encode for MsgBeginRedelegate {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        Ok(vec![
            (1, Value::address(&self.delegator_address)?),
            (2, Value::address(&self.validator_src_address)?),
            (3, Value::address(&self.validator_dst_address)?),
            (4, Value::embedded(&self.amount)?),
        ])
    }
}

/// Unbond coins delegated to a validator
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgUndelegate {
    /// Delegator address
    pub delegator_address: String,

    /// Validator operator address
    pub validator_address: String,

    /// Amount to unbond
    pub amount: Coin,
}

impl MsgUndelegate {
    /// Create a new [`MsgUndelegate`]
    pub fn new(
        delegator_address: impl Into<String>,
        validator_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
            amount,
        }
    }
}

impl MsgType for MsgUndelegate {
    const TYPE_NAME: &'static str = "staking/MsgUndelegate";
}

impl Encode for MsgUndelegate {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        Ok(vec![
            (1, Value::address(&self.delegator_address)?),
            (2, Value::address(&self.validator_address)?),
            (3, Value::embedded(&self.amount)?),
        ])
    }
}
