//! Application configuration and constants.
//!
//! This module provides:
//! - Protocol constants (ports, status codes, redirect bound)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{BodyMatch, Config, LogFormat, LogLevel};
