//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, password digests and helper functions.

pub mod errors;
pub mod logging;
pub mod helpers;
pub mod password;

pub use errors::{GrandPrixError, Result};
pub use password::PasswordHash;
