//! Logging setup.
//!
//! The engine only talks to the `log` facade. Binaries call [`init_logging`]
//! once to install the `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
