use crate::{
    Error,
    Genesis,
    Prompt,
    Result,
};
use serde::Serialize;
use std::path::{
    Path,
    PathBuf,
};

/// File a network's genesis is exported to unless the operator picks another.
pub fn default_export_path(network: &str) -> PathBuf {
    PathBuf::from(format!("{network}.json"))
}

/// Asks which file to export the genesis of `network` to, offering
/// [`default_export_path`].
pub fn prompt_export_path<P: Prompt + ?Sized>(prompt: &mut P, network: &str) -> Result<PathBuf> {
    let default = default_export_path(network).display().to_string();
    let answer = prompt.read_default_string(
        &format!("Which file to save the genesis into? (default = {default})"),
        &default,
    )?;
    Ok(PathBuf::from(answer))
}

/// File a client specific genesis of a network is saved to within `folder`.
pub fn client_spec_path(folder: impl AsRef<Path>, network: &str, client: &str) -> PathBuf {
    folder.as_ref().join(format!("{network}-{client}.json"))
}

fn write_pretty<T: Serialize + ?Sized>(
    what: &'static str,
    spec: &T,
    path: &Path,
) -> Result<()> {
    let out = serde_json::to_vec_pretty(spec)
        .map_err(|source| Error::Encoding { what, source })?;
    std::fs::write(path, out).map_err(|source| Error::Persistence {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the genesis as pretty printed JSON to `path`.
pub fn export_genesis(genesis: &Genesis, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_pretty("genesis", genesis, path).inspect_err(|err| {
        tracing::error!(path = %path.display(), "Failed to save genesis file: {err}");
    })?;
    tracing::info!(path = %path.display(), "Exported existing genesis block");
    Ok(())
}

/// Writes a client specific rendition of a genesis into
/// `<folder>/<network>-<client>.json` and returns the file written.
pub fn save_genesis<T: Serialize + ?Sized>(
    folder: impl AsRef<Path>,
    network: &str,
    client: &str,
    spec: &T,
) -> Result<PathBuf> {
    let path = client_spec_path(folder, network, client);
    write_pretty("genesis chain spec", spec, &path).inspect_err(|err| {
        tracing::error!(client, "Failed to save genesis file: {err}");
    })?;
    tracing::info!(client, path = %path.display(), "Saved genesis chain spec");
    Ok(path)
}
