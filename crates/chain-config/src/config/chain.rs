use crate::{
    serialization::BigNumber,
    AlienConfig,
    CliqueConfig,
    ConsensusConfig,
    EthashConfig,
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

/// Chain wide parameters: the network identifier, the block numbers at which
/// each protocol upgrade activates, and the consensus engine.
///
/// An unset fork block means the fork is not scheduled, which is distinct from
/// a fork scheduled at block zero.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(try_from = "ChainConfigJson", into = "ChainConfigJson")]
pub struct ChainConfig {
    pub chain_id: U256,
    pub homestead_block: Option<U256>,
    pub eip150_block: Option<U256>,
    pub eip150_hash: Option<H256>,
    pub eip155_block: Option<U256>,
    pub eip158_block: Option<U256>,
    pub byzantium_block: Option<U256>,
    pub constantinople_block: Option<U256>,
    pub petersburg_block: Option<U256>,
    pub istanbul_block: Option<U256>,
    pub consensus: Option<ConsensusConfig>,
}

/// JSON layout of [`ChainConfig`]. The consensus engine sits next to the
/// fork schedule, keyed by its name.
#[serde_as]
#[skip_serializing_none]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainConfigJson {
    #[serde_as(as = "BigNumber")]
    #[serde(default)]
    chain_id: U256,
    #[serde_as(as = "Option<BigNumber>")]
    homestead_block: Option<U256>,
    #[serde_as(as = "Option<BigNumber>")]
    #[serde(rename = "eip150Block")]
    eip150_block: Option<U256>,
    #[serde(rename = "eip150Hash")]
    eip150_hash: Option<H256>,
    #[serde_as(as = "Option<BigNumber>")]
    #[serde(rename = "eip155Block")]
    eip155_block: Option<U256>,
    #[serde_as(as = "Option<BigNumber>")]
    #[serde(rename = "eip158Block")]
    eip158_block: Option<U256>,
    #[serde_as(as = "Option<BigNumber>")]
    byzantium_block: Option<U256>,
    #[serde_as(as = "Option<BigNumber>")]
    constantinople_block: Option<U256>,
    #[serde_as(as = "Option<BigNumber>")]
    petersburg_block: Option<U256>,
    #[serde_as(as = "Option<BigNumber>")]
    istanbul_block: Option<U256>,
    ethash: Option<EthashConfig>,
    clique: Option<CliqueConfig>,
    alien: Option<AlienConfig>,
}

impl TryFrom<ChainConfigJson> for ChainConfig {
    type Error = String;

    fn try_from(json: ChainConfigJson) -> Result<Self, Self::Error> {
        let engines = [
            json.ethash.map(ConsensusConfig::Ethash),
            json.clique.map(ConsensusConfig::Clique),
            json.alien.map(ConsensusConfig::Alien),
        ];
        let mut present = engines.into_iter().flatten();
        let consensus = present.next();
        if present.next().is_some() {
            return Err(
                "chain config carries more than one of `ethash`, `clique` and `alien`"
                    .to_string(),
            )
        }

        Ok(Self {
            chain_id: json.chain_id,
            homestead_block: json.homestead_block,
            eip150_block: json.eip150_block,
            eip150_hash: json.eip150_hash,
            eip155_block: json.eip155_block,
            eip158_block: json.eip158_block,
            byzantium_block: json.byzantium_block,
            constantinople_block: json.constantinople_block,
            petersburg_block: json.petersburg_block,
            istanbul_block: json.istanbul_block,
            consensus,
        })
    }
}

impl From<ChainConfig> for ChainConfigJson {
    fn from(config: ChainConfig) -> Self {
        let (mut ethash, mut clique, mut alien) = (None, None, None);
        match config.consensus {
            Some(ConsensusConfig::Ethash(engine)) => ethash = Some(engine),
            Some(ConsensusConfig::Clique(engine)) => clique = Some(engine),
            Some(ConsensusConfig::Alien(engine)) => alien = Some(engine),
            None => {}
        }

        Self {
            chain_id: config.chain_id,
            homestead_block: config.homestead_block,
            eip150_block: config.eip150_block,
            eip150_hash: config.eip150_hash,
            eip155_block: config.eip155_block,
            eip158_block: config.eip158_block,
            byzantium_block: config.byzantium_block,
            constantinople_block: config.constantinople_block,
            petersburg_block: config.petersburg_block,
            istanbul_block: config.istanbul_block,
            ethash,
            clique,
            alien,
        }
    }
}

impl ChainConfig {
    /// The fork schedule of a freshly built genesis, one fork per block.
    pub fn staggered_forks() -> Self {
        let mut config = Self::default();
        for (number, fork) in (0u64..).zip(Fork::ALL) {
            *config.fork_block_mut(fork) = Some(U256::from(number));
        }
        config
    }

    /// Pretty printed JSON of this config, as it appears in a genesis.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| crate::Error::Encoding {
            what: "chain config",
            source,
        })
    }

    pub fn fork_block(&self, fork: Fork) -> Option<U256> {
        match fork {
            Fork::Homestead => self.homestead_block,
            Fork::Eip150 => self.eip150_block,
            Fork::Eip155 => self.eip155_block,
            Fork::Eip158 => self.eip158_block,
            Fork::Byzantium => self.byzantium_block,
            Fork::Constantinople => self.constantinople_block,
            Fork::Petersburg => self.petersburg_block,
            Fork::Istanbul => self.istanbul_block,
        }
    }

    pub fn fork_block_mut(&mut self, fork: Fork) -> &mut Option<U256> {
        match fork {
            Fork::Homestead => &mut self.homestead_block,
            Fork::Eip150 => &mut self.eip150_block,
            Fork::Eip155 => &mut self.eip155_block,
            Fork::Eip158 => &mut self.eip158_block,
            Fork::Byzantium => &mut self.byzantium_block,
            Fork::Constantinople => &mut self.constantinople_block,
            Fork::Petersburg => &mut self.petersburg_block,
            Fork::Istanbul => &mut self.istanbul_block,
        }
    }
}

/// Protocol upgrades in activation order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fork {
    Homestead,
    Eip150,
    Eip155,
    Eip158,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
}

impl Fork {
    pub const ALL: [Fork; 8] = [
        Fork::Homestead,
        Fork::Eip150,
        Fork::Eip155,
        Fork::Eip158,
        Fork::Byzantium,
        Fork::Constantinople,
        Fork::Petersburg,
        Fork::Istanbul,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Fork::Homestead => "Homestead",
            Fork::Eip150 => "EIP150 (Tangerine Whistle)",
            Fork::Eip155 => "EIP155 (Spurious Dragon)",
            Fork::Eip158 => "EIP158/161 (also Spurious Dragon)",
            Fork::Byzantium => "Byzantium",
            Fork::Constantinople => "Constantinople",
            Fork::Petersburg => "Petersburg",
            Fork::Istanbul => "Istanbul",
        }
    }
}
