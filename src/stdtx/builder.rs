//! Builder for `StdTx` transactions which handles construction and signing.

use super::{SignMetadata, SignMsg, StdFee, StdTx};
use crate::{
    address::{Address, ACCOUNT_PREFIX},
    config::{SignerConfig, TxAcl},
    error::Error,
    keys,
    msg::Msg,
    signer::{self, Signer},
};
use tracing::info;

/// [`StdTx`] transaction builder, which handles construction and signing
pub struct Builder {
    /// Account number to include in transactions
    account_number: u64,

    /// Chain ID
    chain_id: String,

    /// Bech32 prefix of the signer's account address
    account_prefix: String,

    /// Transaction signer
    signer: Box<dyn Signer>,

    /// Access control list for the message types this builder signs
    acl: TxAcl,
}

impl Builder {
    /// Create a new transaction builder which signs any message type
    pub fn new(
        account_number: u64,
        chain_id: impl Into<String>,
        signer: impl Signer + 'static,
    ) -> Self {
        Self {
            account_number,
            chain_id: chain_id.into(),
            account_prefix: ACCOUNT_PREFIX.to_owned(),
            signer: Box::new(signer),
            acl: TxAcl::default(),
        }
    }

    /// Create a transaction builder from a [`SignerConfig`], loading the
    /// signing key from the configured key file
    pub fn from_config(config: &SignerConfig) -> Result<Self, Error> {
        let key = keys::load_base64_secp256k1_key(&config.key_file)?;

        Ok(Self {
            account_number: config.account_number,
            chain_id: config.chain_id.clone(),
            account_prefix: config.account_prefix.clone(),
            signer: Box::new(key),
            acl: config.acl.clone(),
        })
    }

    /// Restrict the message types this builder will sign
    pub fn with_acl(mut self, acl: TxAcl) -> Self {
        self.acl = acl;
        self
    }

    /// Get this transaction builder's account number
    pub fn account_number(&self) -> u64 {
        self.account_number
    }

    /// Borrow this transaction builder's chain ID
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Account address of the signer
    pub fn address(&self) -> String {
        Address::from_public_key(&self.signer.public_key()).to_bech32(&self.account_prefix)
    }

    /// Build and sign a transaction containing the given messages
    pub fn sign_tx(
        &self,
        sequence: u64,
        fee: StdFee,
        memo: &str,
        msgs: Vec<Msg>,
    ) -> Result<StdTx, Error> {
        let tx = StdTx::new(msgs, fee, memo);
        let metadata = SignMetadata::new(sequence, self.account_number, self.chain_id.as_str());
        let sign_msg = SignMsg::new(&tx.value, &metadata);
        sign_msg.authorize(&self.acl)?;

        let signature = signer::sign_msg(&sign_msg, self.signer.as_ref())?;

        info!(
            chain_id = %self.chain_id,
            sequence,
            "signed tx with {} message(s): {}",
            tx.value.msg.len(),
            tx.value
                .msg
                .iter()
                .map(Msg::type_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(tx.with_signature(signature))
    }
}

#[cfg(test)]
mod tests {
    use super::Builder;
    use crate::{
        coin::Coin,
        config::TxAcl,
        error::ErrorKind,
        keys::KeyPair,
        msg::{MsgExchangeRateVote, MsgSend},
        stdtx::StdFee,
    };

    const SECRET_KEY: &str = "9af1809f4f5d3a893be99e7aab61962f5e5edd14a43559bd14280b1e7ac21a68";
    const VALIDATOR: &str = "terravaloper1gn37dh0jl4zu4fp48d8y4c0hqs9cel83x3ukwl";

    fn builder() -> Builder {
        let key = subtle_encoding::hex::decode(SECRET_KEY).unwrap();
        Builder::new(167, "soju-0009", KeyPair::from_bytes(&key).unwrap())
    }

    fn send() -> MsgSend {
        MsgSend::new(
            builder().address(),
            "terra1ptdx6akgk7wwemlk5j73artt5t6j8am08ql3qv",
            vec![Coin::new("1000000", "uluna")],
        )
    }

    #[test]
    fn address() {
        assert_eq!(
            builder().address(),
            "terra1gn37dh0jl4zu4fp48d8y4c0hqs9cel83x7st7v"
        );
    }

    #[test]
    fn sign_tx() {
        let tx = builder()
            .sign_tx(
                0,
                StdFee::for_coin(200_000, Coin::new("1000", "uluna")),
                "library test",
                vec![send().into()],
            )
            .unwrap();

        assert_eq!(tx.value.signatures.len(), 1);
        assert_eq!(
            tx.value.signatures[0].signature,
            "fx09nCzp9RsKCiAk+TAoBhNUhJYUhNVK3D+dCW09YZxcdLSGR81j68CF6muS4HpREX78gxG8uttLEKnZG7Ph0w=="
        );
    }

    #[test]
    fn acl_is_enforced() {
        let builder = builder().with_acl(TxAcl {
            msg_type: vec!["oracle/MsgExchangeRateVote".parse().unwrap()],
        });

        let vote = MsgExchangeRateVote::new(
            "8890".parse().unwrap(),
            "1234",
            "ukrw",
            builder.address(),
            VALIDATOR,
        );

        let fee = StdFee::new(50_000, vec![]);
        assert!(builder.sign_tx(1, fee.clone(), "", vec![vote.into()]).is_ok());

        let err = builder
            .sign_tx(1, fee, "", vec![send().into()])
            .unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::Access);
    }
}
