use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid consensus engine choice: {0:?}")]
    InvalidConsensusChoice(String),
    #[error("Failed to read operator input")]
    Input(#[source] std::io::Error),
    #[error("Unsupported genesis URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid genesis location {location:?}")]
    InvalidLocation {
        location: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to open local genesis {path}")]
    LocalTransport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to retrieve remote genesis {url}")]
    RemoteTransport {
        url: url::Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid genesis spec")]
    Format(#[source] serde_json::Error),
    #[error("Corrupted session file {path}")]
    CorruptedSession {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to persist {what} at {path}")]
    Persistence {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode {what}")]
    Encoding {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Genesis reset requires all services and servers torn down ({0} active)")]
    ServicesActive(usize),
    #[error("No genesis block configured")]
    MissingGenesis,
    #[error(
        "Extra-data of {len} bytes is not a vanity, a whole number of signers and a seal"
    )]
    InvalidExtraData { len: usize },
}
