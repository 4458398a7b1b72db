//! Logging utilities.
//!
//! The crate logs through the `log` facade only. This module installs the
//! `env_logger` backend for binaries that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
