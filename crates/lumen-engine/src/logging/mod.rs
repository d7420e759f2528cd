//! Logging setup.
//!
//! The engine logs through the `log` facade; this module installs the
//! `env_logger` backend used by the demo binaries.

mod init;

pub use init::{init_logging, resolve_filter, LoggingConfig};
