use crate::{
    extra_data,
    ports::read_address_list,
    AlienConfig,
    AllocationBuilder,
    CliqueConfig,
    ConsensusConfig,
    ConsensusEngine,
    EthashConfig,
    Genesis,
    Prompt,
    Result,
};
use primitive_types::U256;

pub const DEFAULT_CLIQUE_PERIOD: u64 = 15;
pub const DEFAULT_CLIQUE_EPOCH: u64 = 30_000;

pub const DEFAULT_ALIEN_PERIOD: u64 = 3;
pub const DEFAULT_ALIEN_EPOCH: u64 = 201_600;
pub const DEFAULT_ALIEN_MAX_SIGNERS: u64 = 21;
pub const DEFAULT_ALIEN_MIN_VOTER_BALANCE: u64 = 1_000;
pub const DEFAULT_ALIEN_BLOCK_REWARD: u64 = 10;
pub const DEFAULT_ALIEN_START_DELAY_MINUTES: u64 = 5;

/// Converts whole ether into wei.
pub fn ether(amount: u64) -> U256 {
    U256::from(amount) * U256::exp10(18)
}

/// Asks which consensus engine the chain runs and fills in its parameters,
/// together with the difficulty and extra-data the engine expects.
///
/// Self-voting signers of an alien chain are funded in `allocation` as they
/// are entered.
pub fn configure_consensus<P: Prompt + ?Sized>(
    prompt: &mut P,
    genesis: &mut Genesis,
    allocation: &mut AllocationBuilder,
) -> Result<()> {
    let choice = prompt.read_line(
        "Which consensus engine to use? (default = clique)\n \
         1. Ethash - proof-of-work\n \
         2. Clique - proof-of-authority\n \
         3. Alien  - delegated-proof-of-stake",
    )?;
    let engine = choice.parse::<ConsensusEngine>().inspect_err(|_| {
        tracing::error!(choice = %choice, "Invalid consensus engine choice");
    })?;

    let consensus = match engine {
        ConsensusEngine::Ethash => {
            genesis.extra_data = extra_data::ethash();
            ConsensusConfig::Ethash(EthashConfig {})
        }
        ConsensusEngine::Clique => {
            let (config, signers) = configure_clique(prompt)?;
            genesis.difficulty = U256::one();
            genesis.extra_data = extra_data::encode_signers(&signers);
            ConsensusConfig::Clique(config)
        }
        ConsensusEngine::Alien => {
            let config = configure_alien(prompt, genesis.timestamp, allocation)?;
            genesis.difficulty = U256::one();
            genesis.extra_data = extra_data::encode_voters();
            ConsensusConfig::Alien(config)
        }
    };
    genesis.config.consensus = Some(consensus);
    Ok(())
}

fn configure_clique<P: Prompt + ?Sized>(
    prompt: &mut P,
) -> Result<(CliqueConfig, Vec<crate::Address>)> {
    let period = prompt.read_default_int(
        "How many seconds should blocks take? (default = 15)",
        DEFAULT_CLIQUE_PERIOD,
    )?;
    let signers = read_address_list(
        prompt,
        "Which accounts are allowed to seal? (mandatory at least one)",
        1,
        |_| {},
    )?;
    let config = CliqueConfig {
        period,
        epoch: DEFAULT_CLIQUE_EPOCH,
    };
    Ok((config, signers))
}

fn configure_alien<P: Prompt + ?Sized>(
    prompt: &mut P,
    now: u64,
    allocation: &mut AllocationBuilder,
) -> Result<AlienConfig> {
    let period = prompt.read_default_int(
        "How many seconds should blocks take? (default = 3)",
        DEFAULT_ALIEN_PERIOD,
    )?;
    let epoch = prompt.read_default_int(
        "How many blocks create for one epoch? (default = 201600)",
        DEFAULT_ALIEN_EPOCH,
    )?;
    let max_signer_count = prompt.read_default_int(
        "What is the max number of signers? (default = 21)",
        DEFAULT_ALIEN_MAX_SIGNERS,
    )?;
    let min_voter_balance = ether(prompt.read_default_int(
        "What is the minimum balance for a valid voter? (default = 1000 ETH)",
        DEFAULT_ALIEN_MIN_VOTER_BALANCE,
    )?);
    let block_reward = ether(prompt.read_default_int(
        "How much block reward does one block generate? (default = 10 ETH)",
        DEFAULT_ALIEN_BLOCK_REWARD,
    )?);
    let delay_minutes = prompt.read_default_int(
        "How many minutes delay to create first block? (default = 5 minutes)",
        DEFAULT_ALIEN_START_DELAY_MINUTES,
    )?;
    let genesis_timestamp = now.saturating_add(delay_minutes.saturating_mul(60));

    let self_vote_signers = read_address_list(
        prompt,
        "Which accounts vote for themselves to seal the block? (at least one, those accounts will be auto pre-funded)",
        1,
        |signer| {
            allocation.fund_self_voter(*signer, min_voter_balance);
        },
    )?;

    Ok(AlienConfig {
        period,
        epoch,
        max_signer_count,
        min_voter_balance,
        block_reward,
        genesis_timestamp,
        self_vote_signers,
    })
}
