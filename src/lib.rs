//! Convene: command-line administration for the Convene collaboration
//! platform.
//!
//! Commands are thin wrappers over the platform's admin REST APIs. The
//! reusable core is the execution framework: option-set resolution,
//! validator chains, confirmation-gated destructive actions, and polling
//! of long-running server-side operations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod logging;
pub mod operation;
pub mod options;
pub mod prompt;
pub mod resolve;
pub mod session;
pub mod validation;
