#![deny(clippy::cast_possible_truncation)]
#![deny(unused_crate_dependencies)]

pub mod cli;
