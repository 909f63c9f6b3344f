// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transport Trait
//!
//! Abstraction over the HTTP layer so the client can run against a real
//! network stack or a recording mock.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::TransportOptions;

/// Request headers, name to value.
pub type Headers = BTreeMap<String, String>;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A single GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Absolute URL.
    pub url: String,
    /// Extra headers to send.
    pub headers: Headers,
    /// Options after merging client-level and per-call values.
    pub options: TransportOptions,
}

impl Request {
    /// Looks up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A fully buffered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Whether the transport considers the exchange successful.
    pub success: bool,
    /// Numeric HTTP status code.
    pub status: u16,
    /// Body decoded as text.
    pub body: String,
}

impl Response {
    /// Response whose success flag follows the status code.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Response {
            success: (200..300).contains(&status),
            status,
            body: body.into(),
        }
    }

    /// 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Response::new(200, body)
    }
}

/// Transport trait for issuing requests.
///
/// Implementations block until the response is fully read or the
/// transport gives up. With `halt_on_error` unset or false, a completed
/// exchange is returned as a [`Response`] whatever its status.
pub trait Transport: Send + Sync {
    /// Issues a GET request.
    fn get(&self, request: &Request) -> TransportResult<Response>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, request: &Request) -> TransportResult<Response> {
        (**self).get(request)
    }
}

/// Errors raised by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error from the underlying HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status while `halt_on_error` was set.
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The proxy configuration could not be applied.
    #[error("invalid proxy: {0}")]
    InvalidProxy(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}
