use crate::{
    serialization::{
        HexAddress,
        HexQuantity,
        HexType,
    },
    Address,
    ChainConfig,
};
use primitive_types::{
    H256,
    U256,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_with::{
    serde_as,
    skip_serializing_none,
};
use std::collections::BTreeMap;

pub const DEFAULT_GAS_LIMIT: u64 = 4_700_000;
pub const DEFAULT_DIFFICULTY: u64 = 524_288;

/// Initial balances keyed by account. Keys are kept sorted so the exported
/// document is stable.
pub type GenesisAlloc = BTreeMap<Address, GenesisAccount>;

/// An account in the genesis state.
#[serde_as]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct GenesisAccount {
    #[serde_as(as = "Option<HexType>")]
    pub code: Option<Vec<u8>>,
    pub storage: Option<BTreeMap<H256, H256>>,
    #[serde_as(as = "HexQuantity")]
    pub balance: U256,
    #[serde_as(as = "Option<HexQuantity>")]
    pub nonce: Option<u64>,
}

impl GenesisAccount {
    pub fn with_balance(balance: U256) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }
}

/// The genesis block specification shared by every node of a network.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    pub config: ChainConfig,
    #[serde_as(as = "HexQuantity")]
    #[serde(default)]
    pub nonce: u64,
    /// Seconds since the unix epoch
    #[serde_as(as = "HexQuantity")]
    #[serde(default)]
    pub timestamp: u64,
    /// Consensus specific header payload, see [`crate::extra_data`]
    #[serde_as(as = "HexType")]
    #[serde(default)]
    pub extra_data: Vec<u8>,
    #[serde_as(as = "HexQuantity")]
    pub gas_limit: u64,
    #[serde_as(as = "HexQuantity")]
    pub difficulty: U256,
    #[serde(default)]
    pub mix_hash: H256,
    #[serde(default)]
    pub coinbase: Address,
    #[serde_as(as = "BTreeMap<HexAddress, _>")]
    pub alloc: GenesisAlloc,
    #[serde_as(as = "HexQuantity")]
    #[serde(default)]
    pub number: u64,
    #[serde_as(as = "HexQuantity")]
    #[serde(default)]
    pub gas_used: u64,
    #[serde(default)]
    pub parent_hash: H256,
}

impl Genesis {
    /// A genesis with the default header values and fork schedule, created at
    /// `timestamp` and not yet bound to a consensus engine.
    pub fn new(timestamp: u64) -> Self {
        Self {
            config: ChainConfig::staggered_forks(),
            nonce: 0,
            timestamp,
            extra_data: Vec::new(),
            gas_limit: DEFAULT_GAS_LIMIT,
            difficulty: U256::from(DEFAULT_DIFFICULTY),
            mix_hash: H256::zero(),
            coinbase: Address::zero(),
            alloc: GenesisAlloc::new(),
            number: 0,
            gas_used: 0,
            parent_hash: H256::zero(),
        }
    }

    /// Pretty printed JSON document of this genesis.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| crate::Error::Encoding {
            what: "genesis",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CliqueConfig,
        ConsensusConfig,
    };
    use pretty_assertions::assert_eq;

    fn clique_genesis() -> Genesis {
        let mut genesis = Genesis::new(0x5d_c0_00_00);
        genesis.difficulty = U256::one();
        genesis.config.chain_id = U256::from(4242u64);
        genesis.config.consensus = Some(ConsensusConfig::Clique(CliqueConfig {
            period: 15,
            epoch: 30_000,
        }));
        genesis.extra_data = vec![0u8; 97];
        genesis.alloc.insert(
            Address::from_low_u64_be(1),
            GenesisAccount::with_balance(U256::one()),
        );
        genesis
    }

    #[test]
    fn genesis_document_uses_geth_field_layout() {
        // given
        let genesis = clique_genesis();

        // when
        let json = serde_json::to_value(&genesis).unwrap();

        // then
        assert_eq!(json["timestamp"], "0x5dc00000");
        assert_eq!(json["gasLimit"], "0x47b760");
        assert_eq!(json["difficulty"], "0x1");
        assert_eq!(json["config"]["chainId"], 4242);
        assert_eq!(json["config"]["clique"]["period"], 15);
        assert_eq!(
            json["alloc"]["0x0000000000000000000000000000000000000001"],
            serde_json::json!({ "balance": "0x1" })
        );
        assert_eq!(
            json["extraData"].as_str().unwrap().len(),
            "0x".len() + 97 * 2
        );
    }

    #[test]
    fn genesis_document_survives_a_pass_through_json() {
        // given
        let genesis = clique_genesis();
        let encoded = genesis.to_json_pretty().unwrap();

        // when
        let decoded: Genesis = serde_json::from_str(&encoded).unwrap();

        // then
        assert_eq!(decoded, genesis);
    }

    #[test]
    fn minimal_foreign_document_is_accepted() {
        // given
        let json = r#"{
            "config": { "chainId": 15, "homesteadBlock": 0, "ethash": {} },
            "difficulty": "200",
            "gasLimit": 2100000,
            "alloc": {
                "7df9a875a174b3bc565e6424a0050ebc1b2d1d82": { "balance": "300000" },
                "0xf41c74c9ae680c1aa78f42e5647a62f353b7bdde": {
                    "balance": "0x400",
                    "nonce": "0x1",
                    "code": "0x6000",
                    "storage": {
                        "0x0000000000000000000000000000000000000000000000000000000000000001":
                        "0x0000000000000000000000000000000000000000000000000000000000000002"
                    }
                }
            }
        }"#;

        // when
        let genesis: Genesis = serde_json::from_str(json).unwrap();

        // then
        assert_eq!(genesis.difficulty, U256::from(200u64));
        assert_eq!(genesis.gas_limit, 2_100_000);
        assert_eq!(genesis.timestamp, 0);
        assert!(genesis.extra_data.is_empty());
        assert_eq!(genesis.alloc.len(), 2);
        let contract = Address::from_slice(
            &hex::decode("f41c74c9ae680c1aa78f42e5647a62f353b7bdde").unwrap(),
        );
        let funded = &genesis.alloc[&contract];
        assert_eq!(funded.balance, U256::from(0x400u64));
        assert_eq!(funded.nonce, Some(1));
        assert_eq!(funded.code, Some(vec![0x60, 0x00]));
    }
}
