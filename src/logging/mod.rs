//! Logging layer
//!
//! Plugin-facing output goes through a [`LogSink`] handed to each operation,
//! so callers decide where messages end up. Internally the crate logs with
//! `tracing`, and the CLI installs a subscriber via [`init`].
//!
//! # Modules
//!
//! - [`sink`]: `LogSink` trait and the `tracing`-backed implementation
//! - [`file`]: plugin-local append-only log file
//! - [`subscriber`]: `tracing-subscriber` setup for the CLI

pub mod file;
pub mod sink;
pub mod subscriber;

pub use file::FileLog;
pub use sink::{LogSink, TracingSink};
pub use subscriber::init;
