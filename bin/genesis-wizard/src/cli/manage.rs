use crate::cli::{
    terminal_prompt,
    SessionArgs,
};
use anyhow::Context;
use clap::Parser;
use genesis_wizard_chain_config::{
    prompt_export_path,
    Error,
};
use std::{
    io::Write,
    path::PathBuf,
};

#[derive(Debug, Clone, Parser)]
pub struct EditForks {}

#[derive(Debug, Clone, Parser)]
pub struct Export {
    /// File to write the genesis to. Asked for interactively if not set.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
pub struct Reset {}

#[derive(Debug, Clone, Parser)]
pub struct Show {}

pub fn edit_forks(_: EditForks, args: &SessionArgs) -> anyhow::Result<()> {
    let mut session = args.load()?;
    let mut prompt = terminal_prompt();
    let genesis = session.edit_forks(&mut prompt)?;
    println!("{}", genesis.config.to_json_pretty()?);
    Ok(())
}

pub fn export(command: Export, args: &SessionArgs) -> anyhow::Result<()> {
    let session = args.load()?;
    let path = match command.output {
        Some(path) => path,
        None => prompt_export_path(&mut terminal_prompt(), session.network())?,
    };
    session.export_genesis(&path)?;
    Ok(())
}

pub fn reset(_: Reset, args: &SessionArgs) -> anyhow::Result<()> {
    let mut session = args.load()?;
    session.reset_genesis()?;
    Ok(())
}

pub fn show(_: Show, args: &SessionArgs) -> anyhow::Result<()> {
    write_genesis(args, &mut std::io::stdout().lock())
}

fn write_genesis<W: Write>(args: &SessionArgs, out: &mut W) -> anyhow::Result<()> {
    let session = args.load()?;
    let genesis = session.genesis().ok_or(Error::MissingGenesis)?;
    writeln!(out, "{}", genesis.to_json_pretty()?).context("failed to print genesis")?;
    Ok(())
}
