//! Core domain logic for runifnew
//!
//! This module contains the trigger decision with no direct I/O.
//! Subprocesses and HTTP are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (CommitHash, CommandLine, Outcome)
//! - `services/` - The trigger evaluator and git history queries
//! - `ports/` - Trait definitions for external effects
//! - `error` - Configuration and evaluation errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{ConfigError, TriggerError};
