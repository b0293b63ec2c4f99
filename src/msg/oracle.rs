//! `oracle` module messages.
//!
//! Validators report exchange rates in two steps: a prevote carries only the
//! [`vote_hash`] of the rate, and the vote in the following period reveals
//! the rate together with the salt used for the hash.
//!
//! The `Price*` messages are the older names of the `ExchangeRate*` messages
//! and carry the same information.

use super::MsgType;
use crate::{
    amino::{Encode, Field, Value},
    decimal::Dec,
    error::Error,
    vote_hash::vote_hash,
};
use serde::{Deserialize, Serialize};

/// Commit to an exchange rate without revealing it
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgExchangeRatePrevote {
    /// Vote hash of the committed exchange rate
    pub hash: String,

    /// Denomination the rate is quoted in
    pub denom: String,

    /// Address submitting the prevote on the validator's behalf
    pub feeder: String,

    /// Validator operator address
    pub validator: String,
}

impl MsgExchangeRatePrevote {
    /// Create a new [`MsgExchangeRatePrevote`]
    pub fn new(
        hash: impl Into<String>,
        denom: impl Into<String>,
        feeder: impl Into<String>,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            denom: denom.into(),
            feeder: feeder.into(),
            validator: validator.into(),
        }
    }
}

impl MsgType for MsgExchangeRatePrevote {
    const TYPE_NAME: &'static str = "oracle/MsgExchangeRatePrevote";
}

impl Encode for MsgExchangeRatePrevote {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        prevote_fields(&self.hash, &self.denom, &self.feeder, &self.validator)
    }
}

/// Reveal an exchange rate committed to by an earlier prevote
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgExchangeRateVote {
    /// Exchange rate
    pub exchange_rate: Dec,

    /// Salt the prevote hash was computed with
    pub salt: String,

    /// Denomination the rate is quoted in
    pub denom: String,

    /// Address submitting the vote on the validator's behalf
    pub feeder: String,

    /// Validator operator address
    pub validator: String,
}

impl MsgExchangeRateVote {
    /// Create a new [`MsgExchangeRateVote`]
    pub fn new(
        exchange_rate: Dec,
        salt: impl Into<String>,
        denom: impl Into<String>,
        feeder: impl Into<String>,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            exchange_rate,
            salt: salt.into(),
            denom: denom.into(),
            feeder: feeder.into(),
            validator: validator.into(),
        }
    }

    /// Hash this vote commits to
    pub fn vote_hash(&self) -> String {
        vote_hash(&self.salt, &self.exchange_rate, &self.denom, &self.validator)
    }

    /// Build the prevote which commits to this vote
    pub fn to_prevote(&self) -> MsgExchangeRatePrevote {
        MsgExchangeRatePrevote::new(
            self.vote_hash(),
            self.denom.clone(),
            self.feeder.clone(),
            self.validator.clone(),
        )
    }
}

impl MsgType for MsgExchangeRateVote {
    const TYPE_NAME: &'static str = "oracle/MsgExchangeRateVote";
}

impl Encode for MsgExchangeRateVote {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        vote_fields(
            &self.exchange_rate,
            &self.salt,
            &self.denom,
            &self.feeder,
            &self.validator,
        )
    }
}

/// Commit to a price without revealing it
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgPricePrevote {
    /// Vote hash of the committed price
    pub hash: String,

    /// Denomination the price is quoted in
    pub denom: String,

    /// Address submitting the prevote on the validator's behalf
    pub feeder: String,

    /// Validator operator address
    pub validator: String,
}

impl MsgPricePrevote {
    /// Create a new [`MsgPricePrevote`]
    pub fn new(
        hash: impl Into<String>,
        denom: impl Into<String>,
        feeder: impl Into<String>,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            denom: denom.into(),
            feeder: feeder.into(),
            validator: validator.into(),
        }
    }
}

impl MsgType for MsgPricePrevote {
    const TYPE_NAME: &'static str = "oracle/MsgPricePrevote";
}

impl Encode for MsgPricePrevote {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        prevote_fields(&self.hash, &self.denom, &self.feeder, &self.validator)
    }
}

/// Reveal a price committed to by an earlier prevote
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgPriceVote {
    /// Price
    pub price: Dec,

    /// Salt the prevote hash was computed with
    pub salt: String,

    /// Denomination the price is quoted in
    pub denom: String,

    /// Address submitting the vote on the validator's behalf
    pub feeder: String,

    /// Validator operator address
    pub validator: String,
}

impl MsgPriceVote {
    /// Create a new [`MsgPriceVote`]
    pub fn new(
        price: Dec,
        salt: impl Into<String>,
        denom: impl Into<String>,
        feeder: impl Into<String>,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            price,
            salt: salt.into(),
            denom: denom.into(),
            feeder: feeder.into(),
            validator: validator.into(),
        }
    }

    /// Hash this vote commits to
    pub fn vote_hash(&self) -> String {
        vote_hash(&self.salt, &self.price, &self.denom, &self.validator)
    }

    /// Build the prevote which commits to this vote
    pub fn to_prevote(&self) -> MsgPricePrevote {
        MsgPricePrevote::new(
            self.vote_hash(),
            self.denom.clone(),
            self.feeder.clone(),
            self.validator.clone(),
        )
    }
}

impl MsgType for MsgPriceVote {
    const TYPE_NAME: &'static str = "oracle/MsgPriceVote";
}

impl Encode for MsgPriceVote {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        vote_fields(
            &self.price,
            &self.salt,
            &self.denom,
            &self.feeder,
            &self.validator,
        )
    }
}

fn prevote_fields(
    hash: &str,
    denom: &str,
    feeder: &str,
    validator: &str,
) -> Result<Vec<Field>, Error> {
    Ok(vec![
        (1, Value::String(hash.to_owned())),
        (2, Value::String(denom.to_owned())),
        (3, Value::address(feeder)?),
        (4, Value::address(validator)?),
    ])
}

fn vote_fields(
    rate: &Dec,
    salt: &str,
    denom: &str,
    feeder: &str,
    validator: &str,
) -> Result<Vec<Field>, Error> {
    Ok(vec![
        (1, Value::sdk_dec(rate)),
        (2, Value::String(salt.to_owned())),
        (3, Value::String(denom.to_owned())),
        (4, Value::address(feeder)?),
        (5, Value::address(validator)?),
    ])
}
