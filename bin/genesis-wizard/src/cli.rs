use anyhow::Context;
use clap::Parser;
use genesis_wizard_chain_config::{
    LinePrompt,
    Session,
};
use std::{
    env,
    io::{
        self,
        StdinLock,
        Stderr,
    },
    path::PathBuf,
    str::FromStr,
};
use tracing_subscriber::{
    filter::EnvFilter,
    layer::SubscriberExt,
    registry,
    Layer,
};

pub mod build;
pub mod import;
pub mod manage;

pub const LOG_FILTER: &str = "RUST_LOG";
pub const HUMAN_LOGGING: &str = "HUMAN_LOGGING";

/// `$HOME/.genesis-wizard`, or a relative `.genesis-wizard` without a home.
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".genesis-wizard")
}

#[derive(Parser, Debug)]
#[clap(
    name = "genesis-wizard",
    about = "Interactive genesis block builder",
    version,
    rename_all = "kebab-case"
)]
pub struct Opt {
    #[clap(flatten)]
    pub session: SessionArgs,

    #[clap(subcommand)]
    pub command: Wizard,
}

#[derive(Debug, Parser)]
pub enum Wizard {
    /// Configure a new genesis from scratch.
    New(build::Command),
    /// Import an existing genesis from a file or an http(s) URL.
    Import(import::Command),
    /// Change the block numbers the protocol forks activate at.
    EditForks(manage::EditForks),
    /// Export the genesis as JSON.
    Export(manage::Export),
    /// Remove the genesis from the network's session.
    Reset(manage::Reset),
    /// Print the genesis JSON.
    Show(manage::Show),
}

/// Selects the network whose session is worked on.
#[derive(Debug, Clone, Parser)]
pub struct SessionArgs {
    /// Name of the network. Lowercase letters and digits only.
    #[clap(long, global = true, env = "GENESIS_WIZARD_NETWORK", value_parser = parse_network)]
    pub network: Option<String>,

    /// Directory the session files of all networks are kept in.
    #[clap(
        long = "config-dir",
        global = true,
        env = "GENESIS_WIZARD_CONFIG_DIR",
        default_value = default_config_dir().into_os_string()
    )]
    pub config_dir: PathBuf,
}

impl SessionArgs {
    pub fn network(&self) -> anyhow::Result<&str> {
        self.network
            .as_deref()
            .context("No network selected, pass `--network` or set `GENESIS_WIZARD_NETWORK`")
    }

    /// Loads the session of the selected network.
    pub fn load(&self) -> anyhow::Result<Session> {
        let network = self.network()?;
        let path = self.config_dir.join(network);
        let session = Session::load(network, &path)
            .with_context(|| format!("failed to load session {}", path.display()))?;
        Ok(session)
    }
}

fn parse_network(name: &str) -> Result<String, String> {
    if name.is_empty() {
        return Err("network name cannot be empty".to_string())
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(format!(
            "invalid network name {name:?}: no spaces, hyphens or capital letters please"
        ))
    }
    Ok(name.to_string())
}

pub type TerminalPrompt = LinePrompt<StdinLock<'static>, Stderr>;

/// Asks questions on stderr so stdout only carries command output.
pub fn terminal_prompt() -> TerminalPrompt {
    LinePrompt::new(io::stdin().lock(), io::stderr())
}

pub fn init_logging() -> anyhow::Result<()> {
    let filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env()
            .context("Invalid `RUST_LOG` provided")?,
        None => EnvFilter::new("info"),
    };

    let human_logging = match env::var(HUMAN_LOGGING) {
        Ok(value) => bool::from_str(&value).with_context(|| {
            format!("Expected `true` or `false` to be provided for `{HUMAN_LOGGING}`")
        })?,
        Err(_) => true,
    };

    let layer = tracing_subscriber::fmt::Layer::default().with_writer(io::stderr);

    let fmt = if human_logging {
        layer
            .with_ansi(true)
            .with_level(true)
            .with_target(false)
            .boxed()
    } else {
        // machine parseable structured logs
        layer.with_ansi(false).with_level(true).json().boxed()
    };

    let subscriber = registry::Registry::default().with(filter).with(fmt);

    tracing::subscriber::set_global_default(subscriber)
        .context("setting global default failed")?;
    Ok(())
}

pub fn run_cli() -> anyhow::Result<()> {
    init_logging()?;
    let opt = Opt::parse();
    let session = opt.session;
    match opt.command {
        Wizard::New(command) => build::exec(command, &session),
        Wizard::Import(command) => import::exec(command, &session),
        Wizard::EditForks(command) => manage::edit_forks(command, &session),
        Wizard::Export(command) => manage::export(command, &session),
        Wizard::Reset(command) => manage::reset(command, &session),
        Wizard::Show(command) => manage::show(command, &session),
    }
}
