//! Structured logging setup.
//!
//! All crate code emits `tracing` spans and events; this module installs the
//! subscriber that turns them into log lines.
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `trace_level` in [`Config`](crate::Config) (highest priority)
//! 2. `RUST_LOG` environment variable
//! 3. Default: `"info"`
//!
//! Output goes to stderr unless `log_file` is set, in which case lines are appended to
//! a file that rotates at 10MB with 3-backup retention.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
