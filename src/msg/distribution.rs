//! `distribution` module messages

use super::MsgType;
use crate::{
    amino::{Encode, Field, Value},
    error::Error,
};
use serde::{Deserialize, Serialize};

/// Change the address staking rewards are withdrawn to
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgModifyWithdrawAddress {
    /// Delegator address
    pub delegator_address: String,

    /// New withdraw address
    pub withdraw_address: String,
}

impl MsgModifyWithdrawAddress {
    /// Create a new [`MsgModifyWithdrawAddress`]
    pub fn new(delegator_address: impl Into<String>, withdraw_address: impl Into<String>) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            withdraw_address: withdraw_address.into(),
        }
    }
}

impl MsgType for MsgModifyWithdrawAddress {
    const TYPE_NAME: &'static str = "distribution/MsgModifyWithdrawAddress";
}

impl Encode for MsgModifyWithdrawAddress {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        Ok(vec![
            (1, Value::address(&self.delegator_address)?),
            (2, Value::address(&self.withdraw_address)?),
        ])
    }
}

/// Withdraw the rewards accrued by a delegation to a single validator
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgWithdrawDelegationReward {
    /// Delegator address
    pub delegator_address: String,

    /// Validator operator address
    pub validator_address: String,
}

impl MsgWithdrawDelegationReward {
    /// Create a new [`MsgWithdrawDelegationReward`]
    pub fn new(delegator_address: impl Into<String>, validator_address: impl Into<String>) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
        }
    }
}

impl MsgType for MsgWithdrawDelegationReward {
    const TYPE_NAME: &'static str = "distribution/MsgWithdrawDelegationReward";
}

impl Encode for MsgWithdrawDelegationReward {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        Ok(vec![
            (1, Value::address(&self.delegator_address)?),
            (2, Value::address(&self.validator_address)?),
        ])
    }
}
