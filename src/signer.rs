//! Transaction signing.
//!
//! Sign bytes are hashed with SHA-256 and the digest is signed with
//! deterministic (RFC 6979) ECDSA/secp256k1. Signatures are normalized to
//! "low S" form and serialized as 64-byte `(r, s)` pairs.

pub use k256::ecdsa::{signature::hazmat::PrehashSigner, Signature};

use crate::{
    error::{Error, ErrorKind},
    stdtx::{SignMetadata, SignMsg, StdSignature, StdTxValue},
};
use k256::ecdsa::SigningKey;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

/// Size of a compressed secp256k1 public key
pub const PUBLIC_KEY_SIZE: usize = 33;

/// Transaction signer: signs SHA-256 digests of sign bytes
pub trait Signer: PrehashSigner<Signature> + Send + Sync {
    /// Compressed SEC1 encoding of the public key which verifies signatures
    /// produced by this signer
    fn public_key(&self) -> [u8; PUBLIC_KEY_SIZE];
}

impl Signer for SigningKey {
    fn public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let point = self.verifying_key().to_encoded_point(true);
        let mut public_key = [0u8; PUBLIC_KEY_SIZE];
        public_key.copy_from_slice(point.as_bytes());
        public_key
    }
}

/// Sign a transaction for the account described by `metadata`
pub fn sign(
    tx: &StdTxValue,
    signer: &dyn Signer,
    metadata: &SignMetadata,
) -> Result<StdSignature, Error> {
    sign_msg(&SignMsg::new(tx, metadata), signer)
}

/// Sign a [`SignMsg`]
pub fn sign_msg(sign_msg: &SignMsg<'_>, signer: &dyn Signer) -> Result<StdSignature, Error> {
    let sign_bytes = sign_msg.sign_bytes()?;
    trace!("sign bytes: {}", String::from_utf8_lossy(&sign_bytes));

    let digest = Sha256::digest(&sign_bytes);
    let signature = signer
        .sign_prehash(&digest)
        .map_err(|e| ErrorKind::Signing.context(e))?;

    debug!(
        msgs = sign_msg.msgs().len(),
        len = sign_bytes.len(),
        "signed transaction"
    );

    Ok(StdSignature::new(
        signature.to_bytes().as_slice(),
        &signer.public_key(),
    ))
}

#[cfg(test)]
mod tests {
    use super::{sign, Signature, Signer};
    use crate::{
        coin::Coin,
        msg::MsgSend,
        stdtx::{SignMetadata, SignMsg, StdFee, StdTx},
    };
    use k256::ecdsa::{signature::hazmat::PrehashVerifier, SigningKey, VerifyingKey};
    use sha2::{Digest, Sha256};
    use subtle_encoding::base64;

    const SECRET_KEY: [u8; 32] = [
        0x9a, 0xf1, 0x80, 0x9f, 0x4f, 0x5d, 0x3a, 0x89, 0x3b, 0xe9, 0x9e, 0x7a, 0xab, 0x61, 0x96,
        0x2f, 0x5e, 0x5e, 0xdd, 0x14, 0xa4, 0x35, 0x59, 0xbd, 0x14, 0x28, 0x0b, 0x1e, 0x7a, 0xc2,
        0x1a, 0x68,
    ];

    fn example_tx() -> StdTx {
        let msg = MsgSend::new(
            "terra1gn37dh0jl4zu4fp48d8y4c0hqs9cel83x7st7v",
            "terra1ptdx6akgk7wwemlk5j73artt5t6j8am08ql3qv",
            vec![Coin::new("1000000", "uluna")],
        );

        StdTx::new(
            vec![msg.into()],
            StdFee::for_coin(200_000, Coin::new("1000", "uluna")),
            "library test",
        )
    }

    #[test]
    fn signature_verifies() {
        let key = SigningKey::from_slice(&SECRET_KEY).unwrap();
        let tx = example_tx();
        let metadata = SignMetadata::new(0, 167, "soju-0009");

        let sig = sign(&tx.value, &key, &metadata).unwrap();
        assert_eq!(
            base64::decode(&sig.pub_key.value).unwrap(),
            key.public_key().to_vec()
        );

        let sign_bytes = SignMsg::new(&tx.value, &metadata).sign_bytes().unwrap();
        let signature = Signature::from_slice(&base64::decode(&sig.signature).unwrap()).unwrap();

        VerifyingKey::from(&key)
            .verify_prehash(&Sha256::digest(&sign_bytes), &signature)
            .unwrap();
        assert!(signature.normalize_s().is_none());
    }

    #[test]
    fn signing_is_deterministic() {
        let key = SigningKey::from_slice(&SECRET_KEY).unwrap();
        let tx = example_tx();
        let metadata = SignMetadata::new(0, 167, "soju-0009");

        assert_eq!(
            sign(&tx.value, &key, &metadata).unwrap(),
            sign(&tx.value, &key, &metadata).unwrap()
        );
    }

    #[test]
    fn metadata_is_signed() {
        let key = SigningKey::from_slice(&SECRET_KEY).unwrap();
        let tx = example_tx();

        let a = sign(&tx.value, &key, &SignMetadata::new(0, 167, "soju-0009")).unwrap();
        let b = sign(&tx.value, &key, &SignMetadata::new(1, 167, "soju-0009")).unwrap();
        let c = sign(&tx.value, &key, &SignMetadata::new(0, 167, "columbus-3")).unwrap();

        assert_ne!(a.signature, b.signature);
        assert_ne!(a.signature, c.signature);
    }
}
