//! Core utilities for the vantage scene-graph engine.
//!
//! This crate provides foundational types used across the engine:
//! - Generational arena storage and typed handles
//! - Error types and result aliases
//! - Logging initialization
//! - Version constants

mod arena;
mod error;
mod logging;

pub mod version;

pub use arena::{Arena, Handle};
pub use error::{Error, Result};
pub use logging::init_logging;
