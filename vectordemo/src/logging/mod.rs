//! `env_logger` setup for the walk-through binary.
//!
//! `vectorcore` only emits through the `log` facade; this crate decides where it goes.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
