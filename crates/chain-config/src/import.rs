use crate::{
    Error,
    Genesis,
    Result,
};
use core::{
    fmt,
    str::FromStr,
};
use std::path::PathBuf;
use url::Url;

/// Where a genesis document is loaded from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GenesisSource {
    Local(PathBuf),
    Remote(Url),
}

impl FromStr for GenesisSource {
    type Err = Error;

    /// Anything without a scheme is a local path; only http(s) URLs are
    /// fetched.
    fn from_str(location: &str) -> Result<Self> {
        let location = location.trim();
        match Url::parse(location) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(GenesisSource::Remote(url)),
                scheme => Err(Error::UnsupportedScheme(scheme.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(GenesisSource::Local(PathBuf::from(location)))
            }
            Err(source) => Err(Error::InvalidLocation {
                location: location.to_string(),
                source,
            }),
        }
    }
}

impl fmt::Display for GenesisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenesisSource::Local(path) => write!(f, "{}", path.display()),
            GenesisSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

impl GenesisSource {
    /// Retrieves and parses the document. Either a complete genesis is
    /// returned or an error, never anything in between.
    pub fn load(&self) -> Result<Genesis> {
        let contents = self.fetch()?;
        let genesis = serde_json::from_slice(&contents).map_err(Error::Format)?;
        Ok(genesis)
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            GenesisSource::Local(path) => std::fs::read(path).map_err(|source| {
                Error::LocalTransport {
                    path: path.clone(),
                    source,
                }
            }),
            GenesisSource::Remote(url) => {
                let remote_err = |source| Error::RemoteTransport {
                    url: url.clone(),
                    source,
                };
                let contents = reqwest::blocking::get(url.clone())
                    .and_then(|response| response.error_for_status())
                    .and_then(|response| response.bytes())
                    .map_err(remote_err)?;
                Ok(contents.to_vec())
            }
        }
    }
}

/// Loads a genesis document from a local path or an http(s) URL.
pub fn import_genesis(location: &str) -> Result<Genesis> {
    let source = location.parse::<GenesisSource>()?;
    source.load()
}
