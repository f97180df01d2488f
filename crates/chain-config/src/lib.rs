#![deny(clippy::cast_possible_truncation)]
#![deny(unused_crate_dependencies)]

pub mod allocation;
pub mod builder;
pub mod config;
pub mod configurator;
mod error;
pub mod export;
pub mod extra_data;
mod forks;
pub mod import;
mod ports;
mod prompt;
mod serialization;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

/// 20 byte account address.
pub type Address = primitive_types::H160;

pub use allocation::AllocationBuilder;
pub use builder::GenesisBuilder;
pub use config::*;
pub use error::{
    Error,
    Result,
};
pub use export::{
    default_export_path,
    export_genesis,
    prompt_export_path,
    save_genesis,
};
pub use forks::edit_forks;
pub use import::{
    import_genesis,
    GenesisSource,
};
pub use ports::{
    read_address_list,
    Prompt,
};
pub use primitive_types::{
    H256,
    U256,
};
pub use prompt::LinePrompt;
pub use serialization::{
    parse_address,
    parse_quantity,
};
pub use session::Session;
