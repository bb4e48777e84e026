//! Error types for Adboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure: the request never completed or the server
    /// answered with a non-success HTTP status.
    #[error("request failed: {0}")]
    Http(String),

    /// The server answered 2xx but the response envelope carried
    /// `success: false`.
    #[error("server rejected the request")]
    Rejected,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
