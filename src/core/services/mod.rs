//! Business logic services
//!
//! Orchestration that reaches the outside world only through the port
//! traits.
//!
//! - [`evaluator`] - Decide between building and downloading
//! - [`history`] - HEAD and per-path commit queries

mod exec;
pub mod evaluator;
pub mod history;

pub use evaluator::TriggerEvaluator;
pub use history::{GIT, GitHistory};
