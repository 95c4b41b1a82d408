//! Port traits (interfaces) for external effects
//!
//! The evaluator depends only on these traits. Real implementations live in
//! the `adapters` module; tests substitute fakes that never touch git or the
//! network.

mod fetcher;
mod runner;

pub use fetcher::{FetchError, Fetcher};
pub use runner::{CommandOutput, CommandRunner};
