//! secp256k1 account keys

use crate::{
    address::Address,
    error::{Error, ErrorKind},
    signer::{PrehashSigner, Signature, Signer, PUBLIC_KEY_SIZE},
};
use anomaly::{fail, format_err};
use bip32::{DerivationPath, Language, Mnemonic, XPrv};
use k256::ecdsa::SigningKey;
use std::{fs, path::Path};
use subtle_encoding::base64;
use tracing::debug;
use zeroize::Zeroizing;

/// BIP-44 coin type of Terra
pub const COIN_TYPE: u32 = 330;

/// Size of a secp256k1 secret key in bytes
pub const SECRET_KEY_SIZE: usize = 32;

/// Account key pair
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Derive the key at `m/44'/330'/{account}'/0/{index}` from a BIP-39
    /// English mnemonic, with an empty passphrase
    pub fn from_mnemonic(phrase: &str, account: u32, index: u32) -> Result<Self, Error> {
        let mnemonic = Mnemonic::new(phrase.trim(), Language::English)?;
        let seed = mnemonic.to_seed("");

        let path = format!("m/44'/{}'/{}'/0/{}", COIN_TYPE, account, index)
            .parse::<DerivationPath>()?;

        let xprv = XPrv::derive_from_path(seed.as_bytes(), &path)?;
        debug!("derived key for {}", path);

        Ok(Self {
            signing_key: xprv.private_key().clone(),
        })
    }

    /// Create a key pair from a raw 32-byte secret key
    pub fn from_bytes(secret_key: &[u8]) -> Result<Self, Error> {
        // `from_slice` zero-pads short inputs
        if secret_key.len() != SECRET_KEY_SIZE {
            fail!(
                ErrorKind::InvalidKey,
                "expected {}-byte secp256k1 key, got {} bytes",
                SECRET_KEY_SIZE,
                secret_key.len()
            );
        }

        let signing_key = SigningKey::from_slice(secret_key)
            .map_err(|e| format_err!(ErrorKind::InvalidKey, "invalid secp256k1 key: {}", e))?;

        Ok(Self { signing_key })
    }

    /// Serialize the secret key
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.signing_key.to_bytes().to_vec())
    }

    /// Address of this key's account, Bech32-encoded with the given prefix
    pub fn address(&self, prefix: &str) -> String {
        Address::from_public_key(&self.public_key()).to_bech32(prefix)
    }
}

impl PrehashSigner<Signature> for KeyPair {
    fn sign_prehash(&self, prehash: &[u8]) -> Result<Signature, k256::ecdsa::Error> {
        PrehashSigner::<Signature>::sign_prehash(&self.signing_key, prehash)
    }
}

impl Signer for KeyPair {
    fn public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.signing_key.public_key()
    }
}

/// Load Base64-encoded secret data (i.e. key) from the given path
pub fn load_base64_secret(path: impl AsRef<Path>) -> Result<Zeroizing<Vec<u8>>, Error> {
    let base64_data = Zeroizing::new(fs::read_to_string(path.as_ref()).map_err(|e| {
        format_err!(
            ErrorKind::Io,
            "couldn't read key from {}: {}",
            path.as_ref().display(),
            e
        )
    })?);

    let data = Zeroizing::new(base64::decode(base64_data.trim_end()).map_err(|e| {
        format_err!(
            ErrorKind::InvalidKey,
            "can't decode key from `{}`: {}",
            path.as_ref().display(),
            e
        )
    })?);

    Ok(data)
}

/// Load a Base64-encoded secp256k1 secret key
pub fn load_base64_secp256k1_key(path: impl AsRef<Path>) -> Result<KeyPair, Error> {
    let key_bytes = load_base64_secret(path)?;
    KeyPair::from_bytes(&key_bytes)
}

#[cfg(test)]
mod tests {
    use super::{load_base64_secp256k1_key, KeyPair};
    use crate::{error::ErrorKind, signer::Signer};
    use std::io::Write;
    use subtle_encoding::{base64, hex};

    const MNEMONIC: &str = "spatial fantasy weekend romance entire million celery final moon \
                            solid route theory way hockey north trigger advice balcony melody \
                            fabric alter bullet twice push";

    #[test]
    fn from_mnemonic() {
        let key = KeyPair::from_mnemonic(MNEMONIC, 0, 0).unwrap();

        assert_eq!(
            hex::encode(key.to_bytes().as_slice()),
            b"9af1809f4f5d3a893be99e7aab61962f5e5edd14a43559bd14280b1e7ac21a68"
        );
        assert_eq!(
            base64::encode(key.public_key()),
            b"AnlgfRw+Lmc4E4a61EjMTMmiaXhgNgtaajW1nVspb1CG"
        );
        assert_eq!(
            key.address("terra"),
            "terra1gn37dh0jl4zu4fp48d8y4c0hqs9cel83x7st7v"
        );
    }

    #[test]
    fn invalid_mnemonic() {
        let phrase = MNEMONIC.replace("balcony", "balcany");
        let err = KeyPair::from_mnemonic(&phrase, 0, 0).err().unwrap();
        assert_eq!(*err.kind(), ErrorKind::InvalidKey);
    }

    #[test]
    fn invalid_secret_key() {
        let err = KeyPair::from_bytes(&[0u8; 32]).err().unwrap();
        assert_eq!(*err.kind(), ErrorKind::InvalidKey);
    }

    #[test]
    fn wrong_length_secret_key() {
        for len in &[0, 24, 31, 33, 64] {
            let err = KeyPair::from_bytes(&vec![1u8; *len]).err().unwrap();
            assert_eq!(*err.kind(), ErrorKind::InvalidKey, "accepted {} bytes", len);
        }

        assert!(KeyPair::from_bytes(&[1u8; 32]).is_ok());
    }

    #[test]
    fn load_key_file() {
        let key = KeyPair::from_bytes(&[7u8; 32]).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&base64::encode(key.to_bytes().as_slice()))
            .unwrap();
        file.write_all(b"\n").unwrap();

        let loaded = load_base64_secp256k1_key(file.path()).unwrap();
        assert_eq!(loaded.public_key(), key.public_key());
    }

    #[test]
    fn truncated_key_file() {
        let key = KeyPair::from_bytes(&[7u8; 32]).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&base64::encode(&key.to_bytes()[..24])).unwrap();

        let err = load_base64_secp256k1_key(file.path()).err().unwrap();
        assert_eq!(*err.kind(), ErrorKind::InvalidKey);
    }

    #[test]
    fn missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_base64_secp256k1_key(dir.path().join("missing.key"))
            .err()
            .unwrap();

        assert_eq!(*err.kind(), ErrorKind::Io);
    }
}
