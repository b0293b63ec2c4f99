//! Account and validator addresses

use crate::error::{Error, ErrorKind};
use anomaly::{fail, format_err};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use std::convert::TryFrom;
use subtle_encoding::bech32;

/// Bech32 prefix for Terra account addresses
pub const ACCOUNT_PREFIX: &str = "terra";

/// Size of an address in bytes
pub const ADDRESS_SIZE: usize = 20;

/// Address type (i.e. `sdk.AccAddress` or `sdk.ValAddress`)
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_SIZE]);

impl Address {
    /// Compute the address of a compressed secp256k1 public key:
    /// `RIPEMD160(SHA256(pubkey))`
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let digest = Ripemd160::digest(Sha256::digest(public_key));
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&digest);
        Address(bytes)
    }

    /// Parse an address from its Bech32 form, returning the human-readable
    /// prefix along with the decoded [`Address`]
    pub fn from_bech32(addr: impl AsRef<str>) -> Result<(String, Address), Error> {
        let (hrp, bytes) = bech32::decode(addr.as_ref()).map_err(|e| {
            format_err!(
                ErrorKind::Address,
                "invalid bech32 address `{}`: {}",
                addr.as_ref(),
                e
            )
        })?;

        Ok((hrp, Address::try_from(bytes.as_slice())?))
    }

    /// Encode this address as Bech32 with the given human-readable prefix
    pub fn to_bech32(&self, hrp: &str) -> String {
        bech32::encode(hrp, &self.0)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != ADDRESS_SIZE {
            fail!(
                ErrorKind::Address,
                "expected {}-byte address, got {} bytes",
                ADDRESS_SIZE,
                bytes.len()
            );
        }

        let mut addr = [0u8; ADDRESS_SIZE];
        addr.copy_from_slice(bytes);
        Ok(Address(addr))
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, ACCOUNT_PREFIX};

    const EXAMPLE_ADDRESS: &str = "terra1ptdx6akgk7wwemlk5j73artt5t6j8am08ql3qv";

    #[test]
    fn bech32_round_trip() {
        let (hrp, addr) = Address::from_bech32(EXAMPLE_ADDRESS).unwrap();
        assert_eq!(hrp, ACCOUNT_PREFIX);
        assert_eq!(addr.to_bech32(&hrp), EXAMPLE_ADDRESS);
    }

    #[test]
    fn rejects_bad_checksum() {
        assert!(Address::from_bech32("terra1ptdx6akgk7wwemlk5j73artt5t6j8am08ql3qw").is_err());
    }
}
