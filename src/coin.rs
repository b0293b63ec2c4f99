//! Coins: amounts of a particular denomination

use crate::{
    amino::{self, Encode},
    error::{Error, ErrorKind},
};
use anomaly::fail;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Amount of a given denomination (i.e. `sdk.Coin`).
///
/// Amounts are arbitrary-precision non-negative integers, kept as their
/// base-10 string representation.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Coin {
    /// Denomination
    pub denom: String,

    /// Amount
    pub amount: String,
}

impl Coin {
    /// Create a new [`Coin`]
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

impl Encode for Coin {
    fn amino_fields(&self) -> Result<Vec<amino::Field>, Error> {
        Ok(vec![
            (1, amino::Value::String(self.denom.clone())),
            (2, amino::Value::sdk_int(&self.amount)?),
        ])
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = Error;

    /// Parse a coin of the form `1000uluna`
    fn from_str(s: &str) -> Result<Self, Error> {
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (amount, denom) = s.split_at(split);

        if amount.is_empty() {
            fail!(ErrorKind::Parse, "missing amount in coin: `{}`", s);
        }

        let valid_denom = (3..=16).contains(&denom.len())
            && denom.starts_with(|c: char| c.is_ascii_lowercase())
            && denom
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

        if !valid_denom {
            fail!(ErrorKind::Parse, "invalid denomination in coin: `{}`", s);
        }

        Ok(Coin::new(amount, denom))
    }
}

/// Sort coins by denomination, using byte-wise ordering.
///
/// Takes ownership of the list and returns it sorted. The sort is stable so
/// sorting an already-sorted list is a no-op.
pub fn sort_coins(mut coins: Vec<Coin>) -> Vec<Coin> {
    coins.sort_by(|a, b| a.denom.as_bytes().cmp(b.denom.as_bytes()));
    coins
}
