//! Construction, canonicalization and signing of Amino-encoded `StdTx`
//! transactions for Terra.
//!
//! Transactions are built from typed messages ([`Msg`]), signed over their
//! canonical JSON "sign bytes" with a secp256k1 key, and serialized as Amino
//! binary, from which the transaction hash is computed.
//!
//! # Usage
//!
//! ```no_run
//! use terra_stdtx::{Builder, Coin, KeyPair, MsgSend, StdFee};
//!
//! # fn main() -> Result<(), terra_stdtx::Error> {
//! let key = KeyPair::from_mnemonic("<24 words>", 0, 0)?;
//! let builder = Builder::new(167, "soju-0009", key);
//!
//! let msg = MsgSend::new(
//!     builder.address(),
//!     "terra1ptdx6akgk7wwemlk5j73artt5t6j8am08ql3qv",
//!     vec![Coin::new("1000000", "uluna")],
//! );
//!
//! let fee = StdFee::for_coin(200_000, Coin::new("1000", "uluna"));
//! let tx = builder.sign_tx(0, fee, "memo", vec![msg.into()])?;
//! let (tx_bytes, tx_hash) = tx.encode_and_hash()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Equivalent Go code
//!
//! - [`StdTx` (godoc)](https://godoc.org/github.com/cosmos/cosmos-sdk/x/auth/types#StdTx)
//! - [`sdk.Msg` (godoc)](https://godoc.org/github.com/cosmos/cosmos-sdk/types#Msg)

#![doc(html_root_url = "https://docs.rs/terra-stdtx/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod address;
pub mod amino;
pub mod broadcast;
pub mod canonical;
pub mod coin;
pub mod config;
pub mod decimal;
pub mod error;
pub mod keys;
pub mod msg;
pub mod signer;
pub mod stdtx;
pub mod vote_hash;

mod serializers;

pub use crate::{
    address::Address,
    broadcast::{BroadcastBody, BroadcastMode},
    coin::Coin,
    config::SignerConfig,
    decimal::Dec,
    error::{Error, ErrorKind},
    keys::KeyPair,
    msg::*,
    signer::{sign, Signer},
    stdtx::{Builder, SignMetadata, StdFee, StdSignature, StdTx, StdTxValue},
    vote_hash::vote_hash,
};
