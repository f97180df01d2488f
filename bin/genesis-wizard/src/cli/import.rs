use crate::cli::SessionArgs;
use anyhow::Context;
use clap::Parser;
use genesis_wizard_chain_config::GenesisSource;

/// Replaces the network's genesis with an existing document.
#[derive(Debug, Clone, Parser)]
pub struct Command {
    /// Path or http(s) URL of the genesis JSON.
    #[clap(name = "LOCATION")]
    pub location: String,
}

pub fn exec(command: Command, args: &SessionArgs) -> anyhow::Result<()> {
    let source: GenesisSource = command
        .location
        .parse()
        .with_context(|| format!("cannot import from {:?}", command.location))?;
    let mut session = args.load()?;
    session
        .import_genesis(&source)
        .with_context(|| format!("failed to import genesis from {source}"))?;
    Ok(())
}
