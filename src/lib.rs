// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod check;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod progress;
pub mod specs;

pub use error::{Error, Result};
pub use specs::normalize::{normalize, strip};
pub use specs::status::{ExtractionResult, Status, extract};
