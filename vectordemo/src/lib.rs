//! Walk-through of the `vectorcore` operations.
//!
//! Each [`Scenario`] builds a few vectors, applies one operation and reports
//! the result the way the original exercise printed it.

pub mod logging;
mod scenario;

pub use scenario::{run, DemoConfig, Outcome, Report, Scenario};
