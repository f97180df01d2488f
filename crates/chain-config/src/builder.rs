use crate::{
    configurator::configure_consensus,
    AllocationBuilder,
    Genesis,
    Prompt,
    Result,
};
use primitive_types::U256;
use rand::Rng;
use std::time::{
    SystemTime,
    UNIX_EPOCH,
};

/// Upper bound (exclusive) of the chain id suggested when the operator does
/// not pick one.
pub const RANDOM_CHAIN_ID_BOUND: u64 = 65_536;

/// Drives an interactive genesis construction: defaults, consensus engine,
/// initial balances and chain id, in that order.
#[derive(Clone, Debug)]
pub struct GenesisBuilder {
    timestamp: u64,
    default_chain_id: u64,
}

impl GenesisBuilder {
    /// A builder stamped with the current time that suggests a random chain id.
    pub fn new() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        Self {
            timestamp,
            default_chain_id: rand::thread_rng().gen_range(0..RANDOM_CHAIN_ID_BOUND),
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_default_chain_id(mut self, chain_id: u64) -> Self {
        self.default_chain_id = chain_id;
        self
    }

    /// Runs the whole construction. Nothing is returned unless every step
    /// completed.
    pub fn build<P: Prompt + ?Sized>(&self, prompt: &mut P) -> Result<Genesis> {
        let mut genesis = Genesis::new(self.timestamp);
        let mut allocation = AllocationBuilder::new();

        configure_consensus(prompt, &mut genesis, &mut allocation)?;
        allocation.prompt_prefunded(prompt)?;
        allocation.prompt_precompiles(prompt)?;

        let chain_id = prompt.read_default_int(
            &format!(
                "Specify your chain/network ID if you want an explicit one (default = random, {})",
                self.default_chain_id
            ),
            self.default_chain_id,
        )?;
        genesis.config.chain_id = U256::from(chain_id);
        genesis.alloc = allocation.build();

        tracing::info!(
            accounts = genesis.alloc.len(),
            chain_id,
            "Configured new genesis block"
        );
        Ok(genesis)
    }
}

impl Default for GenesisBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        allocation::prefund_balance,
        configurator::ether,
        extra_data,
        test_helpers::scripted,
        Address,
        ConsensusConfig,
        Error,
        Fork,
        DEFAULT_GAS_LIMIT,
    };
    use pretty_assertions::assert_eq;

    const NOW: u64 = 1_600_000_000;

    fn builder() -> GenesisBuilder {
        GenesisBuilder::new()
            .with_timestamp(NOW)
            .with_default_chain_id(4_321)
    }

    #[test]
    fn clique_genesis_with_precompiles() {
        // given
        let mut prompt = scripted(&[
            "2",
            "",
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "0x1111111111111111111111111111111111111111",
            "",
            "",
            "",
            "",
        ]);

        // when
        let genesis = builder().build(&mut prompt).unwrap();

        // then
        assert_eq!(genesis.timestamp, NOW);
        assert_eq!(genesis.gas_limit, DEFAULT_GAS_LIMIT);
        assert_eq!(genesis.difficulty, U256::one());
        assert_eq!(genesis.config.chain_id, U256::from(4_321u64));
        assert_eq!(genesis.extra_data.len(), 137);
        assert_eq!(
            &genesis.extra_data[32..52],
            Address::repeat_byte(0x11).as_bytes()
        );
        assert_eq!(genesis.alloc.len(), 256);
        assert!(genesis.alloc.values().all(|account| account.balance == U256::one()));
        for (number, fork) in (0u64..).zip(Fork::ALL) {
            assert_eq!(genesis.config.fork_block(fork), Some(U256::from(number)));
        }
    }

    #[test]
    fn alien_genesis_funds_the_voter() {
        // given
        let mut prompt = scripted(&[
            "3",
            "",
            "",
            "",
            "",
            "",
            "",
            "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
            "",
            "",
            "no",
            "99",
        ]);

        // when
        let genesis = builder().build(&mut prompt).unwrap();

        // then
        assert_eq!(genesis.extra_data, extra_data::encode_voters());
        assert_eq!(genesis.config.chain_id, U256::from(99u64));
        assert_eq!(genesis.alloc.len(), 1);
        assert_eq!(
            genesis.alloc[&Address::repeat_byte(0xbb)].balance,
            ether(1000)
        );
    }

    #[test]
    fn prefunding_a_voter_afterwards_overrides_its_voter_balance() {
        // given
        let voter = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
        let mut prompt = scripted(&[
            "3", "", "", "", "", "", "", voter, "", voter, "", "n", "",
        ]);

        // when
        let genesis = builder().build(&mut prompt).unwrap();

        // then
        assert_eq!(
            genesis.alloc[&Address::repeat_byte(0xbb)].balance,
            prefund_balance()
        );
        let Some(ConsensusConfig::Alien(config)) = genesis.config.consensus else {
            panic!("alien config expected");
        };
        assert_eq!(config.self_vote_signers, vec![Address::repeat_byte(0xbb)]);
    }

    #[test]
    fn ethash_genesis_with_prefunded_accounts() {
        // given
        let mut prompt = scripted(&[
            "1",
            "0x0000000000000000000000000000000000000009",
            "0x9999999999999999999999999999999999999999",
            "",
            "y",
            "",
        ]);

        // when
        let genesis = builder().build(&mut prompt).unwrap();

        // then
        assert_eq!(genesis.alloc.len(), 257);
        assert_eq!(
            genesis.alloc[&Address::from_low_u64_be(9)].balance,
            U256::one()
        );
        assert_eq!(
            genesis.alloc[&Address::repeat_byte(0x99)].balance,
            prefund_balance()
        );
    }

    #[test]
    fn interrupted_build_yields_nothing() {
        let mut prompt = scripted(&["2", "", "0x1111111111111111111111111111111111111111"]);

        let result = builder().build(&mut prompt);

        assert!(matches!(result, Err(Error::Input(_))));
    }
}
