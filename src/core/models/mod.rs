//! Domain models for runifnew
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CommitHash`] - A git revision, compared case-insensitively
//! - [`CommandLine`] - The build command, split into program and arguments
//! - [`TriggerConfig`] - Validated inputs for one evaluation
//! - [`Outcome`] - What an evaluation did

mod command_line;
mod commit;
mod outcome;
mod trigger;

pub use command_line::{CommandLine, CommandLineError};
pub use commit::CommitHash;
pub use outcome::Outcome;
pub use trigger::{Download, NO_URL, TriggerConfig};
