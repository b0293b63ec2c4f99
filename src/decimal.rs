//! Fixed-precision decimals (i.e. `sdk.Dec`)

use crate::error::{Error, ErrorKind};
use anomaly::fail;
use serde::{de, Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Number of fractional digits in an `sdk.Dec`
pub const PRECISION: usize = 18;

/// Non-negative decimal normalized to [`PRECISION`] fractional digits.
///
/// Parsing keeps the caller's digits as given and pads them with zeros: an
/// integer gets [`PRECISION`] zeros appended (no decimal point is inserted),
/// and a fraction is right-padded to [`PRECISION`] digits. Inputs with more
/// than [`PRECISION`] fractional digits are rejected rather than truncated.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dec {
    /// Normalized string representation, e.g. `1.500000000000000000` or
    /// `1000000000000000000`
    repr: String,
}

impl Dec {
    /// Accept a string which is already normalized, i.e. the JSON form of a
    /// vote value: either exactly [`PRECISION`] fractional digits, or an
    /// integer with [`PRECISION`] zeros appended
    pub fn from_normalized(s: &str) -> Result<Self, Error> {
        let normalized = match fractional_digits(s)? {
            Some(digits) => digits == PRECISION,
            None => s.len() > PRECISION && s.ends_with(&"0".repeat(PRECISION)),
        };

        if !normalized {
            fail!(ErrorKind::Decimal, "`{}` is not a normalized sdk.Dec", s);
        }

        Ok(Dec { repr: s.to_owned() })
    }

    /// Borrow the normalized string representation
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Integer string of this value scaled by 10^18, which is how an
    /// `sdk.Dec` is serialized in Amino binary
    pub fn to_amino_string(&self) -> String {
        let digits = self.repr.replace('.', "");
        match digits.trim_start_matches('0') {
            "" => "0".to_owned(),
            trimmed => trimmed.to_owned(),
        }
    }
}

impl Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl FromStr for Dec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let fractional_digits = fractional_digits(s)?.unwrap_or(0);

        if fractional_digits > PRECISION {
            fail!(
                ErrorKind::Decimal,
                "`{}` has more than {} fractional digits",
                s,
                PRECISION
            );
        }

        let mut repr = s.to_owned();
        repr.extend(std::iter::repeat('0').take(PRECISION - fractional_digits));
        Ok(Dec { repr })
    }
}

/// Check `s` is a non-negative decimal and count its fractional digits
/// (`None` if it has no decimal point)
fn fractional_digits(s: &str) -> Result<Option<usize>, Error> {
    if !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        fail!(ErrorKind::Decimal, "`{}` is not a non-negative decimal", s);
    }

    if !s.chars().any(|c| c.is_ascii_digit()) {
        fail!(ErrorKind::Decimal, "`{}` has no digits", s);
    }

    match s.split_once('.') {
        Some((_, fraction)) if fraction.contains('.') => {
            fail!(ErrorKind::Decimal, "`{}` has more than one decimal point", s)
        }
        Some((_, fraction)) => Ok(Some(fraction.len())),
        None => Ok(None),
    }
}

impl Serialize for Dec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.repr)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Dec::from_normalized(&String::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}
