// src/error.rs
use thiserror::Error;

/// Failures of the fetch/config glue. The extraction core never produces these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("You're not logged in.")]
    NotLoggedIn,

    #[error("No subjects found.")]
    NoCourses,

    #[error("No data for subject found.")]
    NoData,

    #[error("Mismatching entered and logged username (entered {expected:?}, logged {found:?})")]
    UsernameMismatch { expected: String, found: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("bad config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
