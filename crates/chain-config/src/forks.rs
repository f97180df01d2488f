use crate::{
    ChainConfig,
    Fork,
    Genesis,
    Prompt,
    Result,
};
use primitive_types::U256;

fn describe(block: Option<U256>) -> String {
    block.map_or_else(|| "<nil>".to_string(), |block| block.to_string())
}

/// Walks through every fork in activation order, offering its current block
/// as the default, and returns the genesis with the updated schedule.
///
/// An unscheduled Petersburg defaults to the Constantinople block.
pub fn edit_forks<P: Prompt + ?Sized>(prompt: &mut P, genesis: &Genesis) -> Result<Genesis> {
    let mut config: ChainConfig = genesis.config.clone();
    for fork in Fork::ALL {
        if fork == Fork::Petersburg && config.petersburg_block.is_none() {
            config.petersburg_block = config.constantinople_block;
        }
        let current = config.fork_block(fork);
        let question = format!(
            "Which block should {} come into effect? (default = {})",
            fork.name(),
            describe(current)
        );
        *config.fork_block_mut(fork) = prompt.read_default_big_int(&question, current)?;
    }

    let json = config.to_json_pretty()?;
    tracing::info!("Chain configuration updated:\n{json}");
    Ok(Genesis {
        config,
        ..genesis.clone()
    })
}
