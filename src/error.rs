/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types for the TalentScope client
//!
//! Two families reach the caller: [`AppError::InvalidArgument`] is raised by
//! the validator before any network activity, while [`AppError::Connection`]
//! and [`AppError::RequestFailed`] are raised by the transport.

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller input failed validation; the message names the field and rule
    #[error("{0}")]
    InvalidArgument(String),

    /// The connection to the API could not be established
    #[error("Connection issue: {0}")]
    Connection(#[source] reqwest::Error),

    /// Any other transport level failure, including non-2xx responses
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// Local I/O failure, e.g. reading a CV file for upload
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP client could not be configured
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Builds an [`AppError::InvalidArgument`] from any message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Classifies a `reqwest` failure into the two transport kinds
    ///
    /// Connection-level failures (DNS, refused connection, connect timeout)
    /// become [`AppError::Connection`]; everything else is
    /// [`AppError::RequestFailed`].
    #[must_use]
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connection(err)
        } else {
            Self::RequestFailed(err)
        }
    }

    /// True for connection-level failures, the kind worth retrying
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// True when the error was raised by input validation
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
