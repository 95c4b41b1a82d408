//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that perform I/O:
//!
//! - `process/` - Search-path lookup and subprocess execution
//! - `http/` - Blocking HTTP downloads

pub mod http;
pub mod process;

pub use http::HttpFetcher;
pub use process::SystemRunner;
