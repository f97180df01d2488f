use crate::cli::{
    terminal_prompt,
    SessionArgs,
};
use clap::Parser;
use genesis_wizard_chain_config::GenesisBuilder;

/// Walks through consensus, pre-funded accounts and chain id to create a new
/// genesis. An existing genesis of the network is replaced.
#[derive(Debug, Clone, Parser)]
pub struct Command {
    /// Default chain id offered by the chain id question. Random if not set.
    #[clap(long = "default-chain-id")]
    pub default_chain_id: Option<u64>,
}

impl Command {
    fn builder(&self) -> GenesisBuilder {
        let builder = GenesisBuilder::new();
        match self.default_chain_id {
            Some(chain_id) => builder.with_default_chain_id(chain_id),
            None => builder,
        }
    }
}

pub fn exec(command: Command, args: &SessionArgs) -> anyhow::Result<()> {
    let mut session = args.load()?;
    if session.genesis().is_some() {
        tracing::warn!(network = session.network(), "Replacing the existing genesis");
    }
    let mut prompt = terminal_prompt();
    session.build_genesis(&mut prompt, &command.builder())?;
    Ok(())
}
