use crate::{
    export_genesis,
    forks,
    Error,
    Genesis,
    GenesisBuilder,
    GenesisSource,
    Prompt,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::BTreeSet,
    io::ErrorKind,
    path::{
        Path,
        PathBuf,
    },
};

/// Everything remembered about a network between wizard invocations.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionState {
    #[serde(default)]
    pub genesis: Option<Genesis>,
    /// Hosts running services that were deployed with the current genesis.
    #[serde(default)]
    pub servers: BTreeSet<String>,
}

/// The working context of one network: its genesis and deployed servers,
/// backed by a file.
///
/// Mutating operations persist the new state before adopting it, so a failed
/// operation leaves both the file and the in-memory state untouched.
#[derive(Debug)]
pub struct Session {
    network: String,
    path: PathBuf,
    state: SessionState,
}

impl Session {
    /// An empty session that will be persisted to `path`.
    pub fn new(network: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            network: network.into(),
            path: path.into(),
            state: SessionState::default(),
        }
    }

    /// Loads the session stored at `path`, or starts an empty one if there is
    /// none yet.
    pub fn load(network: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let mut session = Self::new(network, path);
        match std::fs::read(&session.path) {
            Ok(contents) => {
                session.state = serde_json::from_slice(&contents).map_err(|source| {
                    Error::CorruptedSession {
                        path: session.path.clone(),
                        source,
                    }
                })?;
                tracing::debug!(path = %session.path.display(), "Loaded session");
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %session.path.display(), "Starting new session");
            }
            Err(source) => {
                return Err(Error::Persistence {
                    what: "session",
                    path: session.path,
                    source,
                })
            }
        }
        Ok(session)
    }

    /// Writes the current state to the session file.
    pub fn flush(&self) -> Result<()> {
        write_state(&self.path, &self.state)
    }

    fn commit(&mut self, state: SessionState) -> Result<()> {
        write_state(&self.path, &state)?;
        self.state = state;
        Ok(())
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn genesis(&self) -> Option<&Genesis> {
        self.state.genesis.as_ref()
    }

    pub fn servers(&self) -> &BTreeSet<String> {
        &self.state.servers
    }

    pub fn add_server(&mut self, host: impl Into<String>) -> Result<()> {
        let mut state = self.state.clone();
        state.servers.insert(host.into());
        self.commit(state)
    }

    pub fn remove_server(&mut self, host: &str) -> Result<()> {
        let mut state = self.state.clone();
        state.servers.remove(host);
        self.commit(state)
    }

    fn replace_genesis(&mut self, genesis: Option<Genesis>) -> Result<()> {
        let state = SessionState {
            genesis,
            servers: self.state.servers.clone(),
        };
        self.commit(state)
    }

    fn require_genesis(&self) -> Result<&Genesis> {
        self.genesis().ok_or(Error::MissingGenesis)
    }

    /// Interactively builds a fresh genesis, replacing any existing one.
    pub fn build_genesis<P: Prompt + ?Sized>(
        &mut self,
        prompt: &mut P,
        builder: &GenesisBuilder,
    ) -> Result<&Genesis> {
        let genesis = builder.build(prompt)?;
        self.replace_genesis(Some(genesis))?;
        self.require_genesis()
    }

    /// Replaces the genesis with the document at `source`. The current
    /// genesis stays in place unless the document loads completely.
    pub fn import_genesis(&mut self, source: &GenesisSource) -> Result<&Genesis> {
        let genesis = source.load().inspect_err(|err| {
            tracing::error!(source = %source, "Failed to import genesis: {err}");
        })?;
        self.replace_genesis(Some(genesis))?;
        tracing::info!(source = %source, "Imported genesis block");
        self.require_genesis()
    }

    pub fn edit_forks<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> Result<&Genesis> {
        let edited = forks::edit_forks(prompt, self.require_genesis()?)?;
        self.replace_genesis(Some(edited))?;
        self.require_genesis()
    }

    pub fn export_genesis(&self, path: impl AsRef<Path>) -> Result<()> {
        export_genesis(self.require_genesis()?, path)
    }

    /// Drops the genesis. Refused while any server still runs services
    /// deployed with it.
    pub fn reset_genesis(&mut self) -> Result<()> {
        let active = self.state.servers.len();
        if active > 0 {
            tracing::error!(active, "Genesis reset requires all services and servers torn down");
            return Err(Error::ServicesActive(active))
        }
        self.replace_genesis(None)?;
        tracing::info!(network = %self.network, "Genesis block destroyed");
        Ok(())
    }
}

fn write_state(path: &Path, state: &SessionState) -> Result<()> {
    let persistence = |source| Error::Persistence {
        what: "session",
        path: path.to_path_buf(),
        source,
    };
    let out = serde_json::to_vec_pretty(state).map_err(|source| Error::Encoding {
        what: "session",
        source,
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(persistence)?;
    }
    std::fs::write(path, out).map_err(persistence)
}
