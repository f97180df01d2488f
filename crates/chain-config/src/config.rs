mod chain;
mod consensus;
mod genesis;

pub use chain::*;
pub use consensus::*;
pub use genesis::*;
