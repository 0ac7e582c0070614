//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration file, falls back to
//! defaults when it does not exist yet, and can write the effective
//! configuration back out as a starting point for editing.

pub mod config;
