// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Errors raised by [`crate::WpOrgApi`]. A shape mismatch in an otherwise
//! valid response is not an error; operations report it as `Ok(None)`.

use thiserror::Error;

use crate::transport::TransportError;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that abort an API operation.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The transport could not complete the request.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The request completed but did not report success with a 2xx status.
    #[error("request to {url} failed with status {status}")]
    RequestFailed {
        /// Requested URL
        url: String,
        /// Status code reported by the transport
        status: u16,
    },

    /// The response body could not be decoded as JSON.
    #[error("invalid JSON from {url}: {source}")]
    InvalidJson {
        /// Requested URL
        url: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
