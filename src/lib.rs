//! jts-bridge - test-station adapter for the JTS unit-tracking service
//!
//! This library backs the `jts-bridge` binary, a one-shot command-line
//! adapter the station software invokes once per tracking event. It
//! registers units under test, reports their pass/fail outcome, shows
//! operator messages, and hands small pieces of state back to the caller
//! through single-line mailbox files placed beside the executable.
//!
//! ## Module Organization
//!
//! - [`config`] - Station settings: loading, environment overrides
//! - [`mailbox`] - Single-line mailbox files (the caller-facing IPC slots)
//! - [`tracking`] - Tracking capability: trait, simulated and CLI backends
//! - [`notify`] - Operator notification surface
//! - [`commands`] - Command parsing, validation, and dispatch
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Behavior contract
//!
//! - **One command per process:** each invocation dispatches a single
//!   sub-command and exits; there is no persistent state beyond the
//!   mailbox files.
//! - **Never crash the caller:** mailbox operations and dispatch are
//!   advisory; failures are logged and reflected in mailbox contents, not
//!   raised. The process always exits cleanly.
//! - **Simulation mode:** a configuration toggle substitutes fabricated
//!   tracking replies so the full dispatch path can run offline.

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod config;
pub mod error;
pub mod mailbox;
pub mod notify;
pub mod tracking;

// Re-exports for core functionality
pub use commands::{Command, Dispatcher, Failure, Invocation, Outcome};
pub use config::{ConfigLoader, ProcessConfig};
pub use error::{Error, Result};
pub use mailbox::MailboxFile;
pub use notify::{ConsoleNotifier, Notify, Severity};
pub use tracking::{SdkTracker, SimulatedTracker, Tracking};

/// The current version of jts-bridge from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
