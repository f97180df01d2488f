use crate::{
    serialization::{
        BigNumber,
        Unprefixed,
    },
    Address,
    Error,
};
use core::str::FromStr;
use primitive_types::U256;
use serde::{
    Deserialize,
    Serialize,
};
use serde_with::serde_as;

/// Consensus engine parameters. A chain config carries at most one of these,
/// keyed in the JSON document by the lower-case engine name.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusConfig {
    Ethash(EthashConfig),
    Clique(CliqueConfig),
    Alien(AlienConfig),
}

/// Proof-of-work carries no parameters of its own.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct EthashConfig {}

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct CliqueConfig {
    /// Number of seconds between blocks to enforce
    pub period: u64,
    /// Epoch length to reset votes and checkpoint
    pub epoch: u64,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlienConfig {
    /// Number of seconds between blocks to enforce
    pub period: u64,
    /// Epoch length to reset votes and checkpoint
    pub epoch: u64,
    #[serde(rename = "maxSignersCount")]
    pub max_signer_count: u64,
    /// Minimum balance a voter must hold for its vote to count
    #[serde_as(as = "BigNumber")]
    pub min_voter_balance: U256,
    #[serde_as(as = "BigNumber")]
    #[serde(default)]
    pub block_reward: U256,
    /// Unix time at which the first signer loop starts
    pub genesis_timestamp: u64,
    /// Signers voting for themselves at genesis; each one is pre-funded
    #[serde_as(as = "Vec<Unprefixed>")]
    #[serde(rename = "signers", default)]
    pub self_vote_signers: Vec<Address>,
}

/// The engine picked from the wizard menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsensusEngine {
    /// Proof-of-work
    Ethash,
    /// Proof-of-authority
    Clique,
    /// Delegated proof-of-authority with self-voting signers
    Alien,
}

impl FromStr for ConsensusEngine {
    type Err = Error;

    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice.trim() {
            "1" => Ok(ConsensusEngine::Ethash),
            "" | "2" => Ok(ConsensusEngine::Clique),
            "3" => Ok(ConsensusEngine::Alien),
            other => Err(Error::InvalidConsensusChoice(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1" => ConsensusEngine::Ethash; "one selects ethash")]
    #[test_case("2" => ConsensusEngine::Clique; "two selects clique")]
    #[test_case("" => ConsensusEngine::Clique; "empty defaults to clique")]
    #[test_case(" 3 " => ConsensusEngine::Alien; "three selects alien")]
    fn engine_choice_is_parsed(choice: &str) -> ConsensusEngine {
        choice.parse().unwrap()
    }

    #[test_case("4"; "out of range")]
    #[test_case("clique"; "engine name")]
    fn unknown_engine_choice_is_rejected(choice: &str) {
        let result = choice.parse::<ConsensusEngine>();

        assert!(matches!(result, Err(Error::InvalidConsensusChoice(_))));
    }

    #[test]
    fn alien_config_uses_legacy_field_names() {
        // given
        let config = ConsensusConfig::Alien(AlienConfig {
            period: 3,
            epoch: 201_600,
            max_signer_count: 21,
            min_voter_balance: U256::from(1000u64) * U256::exp10(18),
            block_reward: U256::from(10u64) * U256::exp10(18),
            genesis_timestamp: 1_700_000_300,
            self_vote_signers: vec![Address::from_low_u64_be(0xbb)],
        });

        // when
        let json = serde_json::to_value(&config).unwrap();

        // then
        pretty_assertions::assert_eq!(
            json,
            serde_json::json!({
                "alien": {
                    "period": 3,
                    "epoch": 201600,
                    "maxSignersCount": 21,
                    "minVoterBalance": "1000000000000000000000",
                    "blockReward": 10_000_000_000_000_000_000u64,
                    "genesisTimestamp": 1700000300u64,
                    "signers": ["00000000000000000000000000000000000000bb"],
                }
            })
        );
    }

    #[test]
    fn ethash_config_is_an_empty_object() {
        let json = serde_json::to_string(&ConsensusConfig::Ethash(EthashConfig {}))
            .unwrap();

        assert_eq!(json, r#"{"ethash":{}}"#);
    }
}
