//! Common utilities for Adboard
//!
//! Shared code used across all Adboard crates.

pub mod error;

pub use error::{Error, Result};
