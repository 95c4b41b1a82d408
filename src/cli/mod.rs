//! CLI layer for runifnew
//!
//! - [`app`] - Flag definitions, argument normalisation and entry point

pub mod app;

// Re-export main entry point
pub use app::run;
