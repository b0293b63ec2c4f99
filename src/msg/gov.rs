//! `gov` module messages

use super::MsgType;
use crate::{
    amino::{Encode, Field, Value},
    coin::{sort_coins, Coin},
    error::Error,
    serializers::u64_string,
};
use serde::{Deserialize, Serialize};

/// Deposit coins towards a governance proposal
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgDeposit {
    /// Proposal ID
    #[serde(with = "u64_string")]
    pub proposal_id: u64,

    /// Depositor address
    pub depositor: String,

    /// Deposit, sorted by denomination
    pub amount: Vec<Coin>,
}

impl MsgDeposit {
    /// Create a new [`MsgDeposit`], sorting `amount` by denomination
    pub fn new(proposal_id: u64, depositor: impl Into<String>, amount: Vec<Coin>) -> Self {
        Self {
            proposal_id,
            depositor: depositor.into(),
            amount: sort_coins(amount),
        }
    }
}

impl MsgType for MsgDeposit {
    const TYPE_NAME: &'static str = "gov/MsgDeposit";
}

impl Encode for MsgDeposit {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        let mut fields = vec![
            (1, Value::Uint64(self.proposal_id)),
            (2, Value::address(&self.depositor)?),
        ];

        for coin in &self.amount {
            fields.push((3, Value::embedded(coin)?));
        }

        Ok(fields)
    }
}

/// Vote on a governance proposal
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgVote {
    /// Proposal ID
    #[serde(with = "u64_string")]
    pub proposal_id: u64,

    /// Voter address
    pub voter: String,

    /// Option voted for
    pub option: VoteOption,
}

impl MsgVote {
    /// Create a new [`MsgVote`]
    pub fn new(proposal_id: u64, voter: impl Into<String>, option: VoteOption) -> Self {
        Self {
            proposal_id,
            voter: voter.into(),
            option,
        }
    }
}

impl MsgType for MsgVote {
    const TYPE_NAME: &'static str = "gov/MsgVote";
}

impl Encode for MsgVote {
    fn amino_fields(&self) -> Result<Vec<Field>, Error> {
        Ok(vec![
            (1, Value::Uint64(self.proposal_id)),
            (2, Value::address(&self.voter)?),
            (3, Value::Uint64(self.option.code())),
        ])
    }
}

/// Governance vote options.
///
/// Amino JSON uses the option's name, the binary encoding its numeric code.
/// There is no empty option.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum VoteOption {
    /// Vote in favor
    Yes,

    /// Take part without voting either way
    Abstain,

    /// Vote against
    No,

    /// Vote against and burn the proposal's deposit
    NoWithVeto,
}

impl VoteOption {
    /// Numeric code of this option
    pub fn code(self) -> u64 {
        match self {
            VoteOption::Yes => 1,
            VoteOption::Abstain => 2,
            VoteOption::No => 3,
            VoteOption::NoWithVeto => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MsgDeposit, MsgVote, VoteOption};
    use crate::{amino::Registered, coin::Coin, msg::Msg};

    const VOTER: &str = "terra1gn37dh0jl4zu4fp48d8y4c0hqs9cel83x7st7v";

    #[test]
    fn vote_json() {
        let msg = MsgVote::new(12, VOTER, VoteOption::NoWithVeto);
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["proposal_id"], "12");
        assert_eq!(json["option"], "NoWithVeto");
    }

    #[test]
    fn option_json_is_the_name() {
        assert_eq!(serde_json::to_string(&VoteOption::Yes).unwrap(), "\"Yes\"");

        for input in &["1", "0", "\"Empty\""] {
            assert!(serde_json::from_str::<VoteOption>(input).is_err());
        }
    }

    #[test]
    fn vote_amino_uses_option_code() {
        let msg = Msg::from(MsgVote::new(1, VOTER, VoteOption::No));
        let bytes = msg.to_amino_bytes().unwrap();

        // proposal_id = 1, then 20-byte voter address, then option = 3
        assert_eq!(&bytes[4..6], &[0x08, 0x01]);
        assert_eq!(&bytes[6..8], &[0x12, 0x14]);
        assert_eq!(&bytes[28..], &[0x18, 0x03]);
    }

    #[test]
    fn deposit_sorts_coins() {
        let msg = MsgDeposit::new(
            3,
            VOTER,
            vec![Coin::new("1", "uusd"), Coin::new("1", "uluna")],
        );

        assert_eq!(msg.amount[0].denom, "uluna");
        assert_eq!(msg.amount[1].denom, "uusd");
    }
}
