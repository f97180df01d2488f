//! Layout of the genesis header `extraData` field.
//!
//! ```text
//! | vanity (32 bytes) | signer 0 (20 bytes) | ... | signer n-1 | seal (65 bytes) |
//! ```
//!
//! The vanity and seal regions are zero at genesis. Signers are embedded in
//! ascending byte order, so every node building a chain from the same
//! authority set derives the same header.

use crate::{
    Address,
    Error,
    Result,
};

/// Bytes reserved for signer vanity.
pub const EXTRA_VANITY: usize = 32;
/// Bytes reserved for the signer seal.
pub const EXTRA_SEAL: usize = 65;
pub const ADDRESS_LENGTH: usize = 20;

/// Extra-data of a proof-of-work genesis: vanity only.
pub fn ethash() -> Vec<u8> {
    vec![0u8; EXTRA_VANITY]
}

/// Encodes the authority list of a proof-of-authority genesis.
pub fn encode_signers(signers: &[Address]) -> Vec<u8> {
    let mut sorted = signers.to_vec();
    sorted.sort();

    let mut extra_data = Vec::with_capacity(
        EXTRA_VANITY + sorted.len() * ADDRESS_LENGTH + EXTRA_SEAL,
    );
    extra_data.extend_from_slice(&[0u8; EXTRA_VANITY]);
    for signer in &sorted {
        extra_data.extend_from_slice(signer.as_bytes());
    }
    extra_data.extend_from_slice(&[0u8; EXTRA_SEAL]);
    extra_data
}

/// Extra-data of a self-voting genesis. Voters live in the chain config, so
/// the signer region stays empty.
pub fn encode_voters() -> Vec<u8> {
    encode_signers(&[])
}

/// Recovers the authority list embedded by [`encode_signers`].
pub fn decode_signers(extra_data: &[u8]) -> Result<Vec<Address>> {
    let len = extra_data.len();
    let signers_len = len
        .checked_sub(EXTRA_VANITY + EXTRA_SEAL)
        .filter(|signers_len| signers_len % ADDRESS_LENGTH == 0)
        .ok_or(Error::InvalidExtraData { len })?;

    let signers = &extra_data[EXTRA_VANITY..EXTRA_VANITY + signers_len];
    Ok(signers
        .chunks_exact(ADDRESS_LENGTH)
        .map(Address::from_slice)
        .collect())
}
