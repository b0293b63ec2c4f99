//! Commit-reveal hashes for oracle votes.
//!
//! A prevote publishes `vote_hash(salt, value, denom, voter)`. The vote in the
//! following period reveals `salt` and `value`, and the chain recomputes the
//! hash to check it against the earlier commitment.

use crate::decimal::Dec;
use sha2::{Digest, Sha256};
use subtle_encoding::hex;

/// Number of digest bytes kept in a vote hash
pub const VOTE_HASH_SIZE: usize = 20;

/// Compute the hex-encoded vote hash over `salt:value:denom:voter`
pub fn vote_hash(salt: &str, value: &Dec, denom: &str, voter: &str) -> String {
    let proof = format!("{}:{}:{}:{}", salt, value, denom, voter);
    let digest = Sha256::digest(proof.as_bytes());
    String::from_utf8(hex::encode(&digest[..VOTE_HASH_SIZE])).expect("hex should always be UTF-8")
}

#[cfg(test)]
mod tests {
    use super::vote_hash;
    use crate::decimal::Dec;

    const VALIDATOR: &str = "terravaloper1vqnhgc6d0jyggtytzqrnsc40r4zez6tx99382w";

    fn rate(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn known_hash() {
        assert_eq!(
            vote_hash("1234", &rate("8890"), "ukrw", VALIDATOR),
            "c44758289b9db7cebd238b111fd24ba6719db5d7"
        );
    }

    #[test]
    fn hashes_the_value_as_written() {
        // `8890.000` pads to `8890.000000000000000000`, `8890` to
        // `8890000000000000000000`
        assert_eq!(
            vote_hash("1234", &rate("8890.000"), "ukrw", VALIDATOR),
            "8a02564c51f082e3d4813be3e69af9821a260f07"
        );
        assert_eq!(
            vote_hash("1234", &rate("8890.0"), "ukrw", VALIDATOR),
            vote_hash("1234", &rate("8890.000000000000000000"), "ukrw", VALIDATOR),
        );
    }

    #[test]
    fn any_input_changes_the_hash() {
        let base = vote_hash("1234", &rate("8890"), "ukrw", VALIDATOR);

        assert_eq!(
            vote_hash("1235", &rate("8890"), "ukrw", VALIDATOR),
            "ec824b214b40aaf9ecfd7f62eab4acfdd93968b4"
        );
        assert_eq!(
            vote_hash("1234", &rate("8890.5"), "ukrw", VALIDATOR),
            "5c242e5bfa8be9366012802db3ae77267501cc76"
        );
        assert_ne!(vote_hash("1234", &rate("8890"), "uusd", VALIDATOR), base);
        assert_ne!(vote_hash("1234", &rate("8890"), "ukrw", "terravaloper1"), base);
    }

    #[test]
    fn hash_is_twenty_bytes() {
        assert_eq!(vote_hash("s", &rate("1"), "uluna", VALIDATOR).len(), 40);
    }
}
