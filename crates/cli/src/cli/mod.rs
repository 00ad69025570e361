//! Subcommand implementations for the htmlsplit binary.

pub mod combine_cmd;
pub mod io;
pub mod split_cmd;
